use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::LoginRequest;
use crate::services::ApiClient;

/// Login form. Shows the outcome inline; navigation after a successful
/// login is not wired up yet.
#[function_component(Login)]
pub fn login() -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let message = use_state(|| None::<String>);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let message = message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                if email.is_empty() || password.is_empty() {
                    return;
                }

                let message = message.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let api = ApiClient::new();
                    match api.login(&LoginRequest { email, password }).await {
                        Ok(response) => {
                            log::info!("✅ Login successful");
                            message.set(Some(format!(
                                "Login successful: {}",
                                response.message.unwrap_or_default()
                            )));
                        }
                        Err(e) => {
                            log::error!("❌ Login failed: {}", e);
                            message.set(Some(format!("Login failed: {}", e)));
                        }
                    }
                });
            }
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-form-container">
                <h1>{"Login"}</h1>
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="login-email">{"Email:"}</label>
                        <input
                            type="email"
                            id="login-email"
                            ref={email_ref}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-password">{"Password:"}</label>
                        <input
                            type="password"
                            id="login-password"
                            ref={password_ref}
                            required=true
                        />
                    </div>
                    <button type="submit">{"Log in"}</button>
                </form>
                if let Some(message) = (*message).as_ref() {
                    <p class="message">{message}</p>
                }
            </div>
        </div>
    }
}
