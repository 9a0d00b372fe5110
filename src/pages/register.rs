use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::RegisterRequest;
use crate::services::ApiClient;

/// Registration form. Same inline success/failure pattern as the login
/// page; no navigation on completion.
#[function_component(Register)]
pub fn register() -> Html {
    let username_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let message = use_state(|| None::<String>);

    let on_submit = {
        let username_ref = username_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let phone_ref = phone_ref.clone();
        let message = message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let inputs = (
                username_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                phone_ref.cast::<HtmlInputElement>(),
            );
            if let (Some(username), Some(email), Some(password), Some(phone)) = inputs {
                let request = RegisterRequest {
                    username: username.value(),
                    email: email.value(),
                    password: password.value(),
                    phone_number: phone.value(),
                };

                if request.username.is_empty()
                    || request.email.is_empty()
                    || request.password.is_empty()
                {
                    return;
                }

                let message = message.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let api = ApiClient::new();
                    match api.register(&request).await {
                        Ok(response) => {
                            log::info!("✅ Registration successful");
                            message.set(Some(format!(
                                "Registration successful: {}",
                                response.message.unwrap_or_default()
                            )));
                        }
                        Err(e) => {
                            log::error!("❌ Registration failed: {}", e);
                            message.set(Some(format!("Registration failed: {}", e)));
                        }
                    }
                });
            }
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-form-container">
                <h1>{"Register"}</h1>
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="register-username">{"Username:"}</label>
                        <input
                            type="text"
                            id="register-username"
                            ref={username_ref}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-email">{"Email:"}</label>
                        <input
                            type="email"
                            id="register-email"
                            ref={email_ref}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-password">{"Password:"}</label>
                        <input
                            type="password"
                            id="register-password"
                            ref={password_ref}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-phone">{"Phone number:"}</label>
                        <input
                            type="tel"
                            id="register-phone"
                            ref={phone_ref}
                        />
                    </div>
                    <button type="submit">{"Create account"}</button>
                </form>
                if let Some(message) = (*message).as_ref() {
                    <p class="message">{message}</p>
                }
            </div>
        </div>
    }
}
