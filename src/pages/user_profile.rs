use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use yew::prelude::*;

use crate::models::user::UserProfile as Profile;
use crate::models::{DiscountCard, LoyaltyProfile};
use crate::services::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct UserProfileProps {
    pub user_id: u32,
}

/// Aggregated profile view: account data, loyalty status, discount
/// card and QR code race concurrently and render all-or-nothing.
#[function_component(UserProfile)]
pub fn user_profile(props: &UserProfileProps) -> Html {
    let profile = use_state(|| None::<Profile>);
    let loyalty = use_state(|| None::<LoyaltyProfile>);
    let discount_card = use_state(|| None::<DiscountCard>);
    let qr_code = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let profile = profile.clone();
        let loyalty = loyalty.clone();
        let discount_card = discount_card.clone();
        let qr_code = qr_code.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(props.user_id, move |&user_id| {
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let (profile_res, loyalty_res, card_res, qr_res) = futures::join!(
                    api.get_user_profile(user_id),
                    api.get_loyalty_profile(user_id),
                    api.get_discount_card(user_id),
                    api.get_qr_code(user_id),
                );

                match (profile_res, loyalty_res, card_res, qr_res) {
                    (Ok(account), Ok(loyalty_profile), Ok(card), Ok(qr_bytes)) => {
                        log::info!("👤 Profile loaded for user {}", user_id);
                        profile.set(Some(account));
                        loyalty.set(Some(loyalty_profile));
                        discount_card.set(Some(card));
                        qr_code.set(Some(qr_data_url(&qr_bytes)));
                    }
                    (Err(e), _, _, _)
                    | (_, Err(e), _, _)
                    | (_, _, Err(e), _)
                    | (_, _, _, Err(e)) => {
                        log::error!("❌ Error loading profile for user {}: {}", user_id, e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div>{"Loading user profile..."}</div> };
    }
    if let Some(e) = (*error).as_ref() {
        return html! { <div>{format!("Error: {}", e)}</div> };
    }

    let Some(account) = (*profile).as_ref() else {
        return html! { <div>{"User profile not found."}</div> };
    };

    html! {
        <div>
            <h1>{format!("User Profile: {}", account.username)}</h1>
            <p>{format!("Email: {}", account.email)}</p>
            if let Some(phone) = &account.phone_number {
                <p>{format!("Phone: {}", phone)}</p>
            }

            <h2>{"Loyalty Information"}</h2>
            {
                match (*loyalty).as_ref() {
                    Some(loyalty_profile) => html! {
                        <div>
                            <p>{format!("Points: {}", loyalty_profile.points)}</p>
                            <p>{format!("Tier: {}", loyalty_profile.tier)}</p>
                            if let Some(benefits) = loyalty_profile
                                .current_tier
                                .as_ref()
                                .and_then(|tier| tier.benefits.as_ref())
                            {
                                <p>{format!("Benefits: {}", benefits)}</p>
                            }
                        </div>
                    },
                    None => html! { <p>{"No loyalty information available."}</p> },
                }
            }

            <h2>{"Discount Card"}</h2>
            {
                match (*discount_card).as_ref() {
                    Some(card) => html! {
                        <div>
                            <p>{format!("Discount Level: {}", card.discount_level)}</p>
                            <p>{format!("Progress to Next Level: {}%", card.progress_to_next_level)}</p>
                        </div>
                    },
                    None => html! { <p>{"No discount card information available."}</p> },
                }
            }

            <h2>{"QR Code"}</h2>
            if let Some(qr) = (*qr_code).as_ref() {
                <img src={qr.clone()} alt="QR Code" />
            }
        </div>
    }
}

/// PNG bytes from the QR endpoint, embedded as an inline image source.
fn qr_data_url(bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_bytes_become_a_png_data_url() {
        let url = qr_data_url(&[0x89, b'P', b'N', b'G']);
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn qr_payload_round_trips() {
        let bytes = vec![1u8, 2, 3, 4, 5];
        let url = qr_data_url(&bytes);
        let payload = url.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), bytes);
    }
}
