use yew::prelude::*;

use crate::components::NotificationCard;
use crate::models::Notification;
use crate::services::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct NotificationsProps {
    pub user_id: u32,
}

#[function_component(Notifications)]
pub fn notifications(props: &NotificationsProps) -> Html {
    let notifications = use_state(Vec::<Notification>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let notifications = notifications.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(props.user_id, move |&user_id| {
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.get_notifications(user_id).await {
                    Ok(list) => {
                        log::info!("🔔 Loaded {} notifications for user {}", list.len(), user_id);
                        notifications.set(list);
                    }
                    Err(e) => {
                        log::error!("❌ Error loading notifications: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div>{"Loading notifications..."}</div> };
    }
    if let Some(e) = (*error).as_ref() {
        return html! { <div>{format!("Error: {}", e)}</div> };
    }

    html! {
        <div>
            <h1>{"Your Notifications"}</h1>
            if notifications.is_empty() {
                <p>{"No notifications found."}</p>
            } else {
                <ul class="notification-list">
                    { for notifications.iter().map(|notification| html! {
                        <li key={notification.id}>
                            <NotificationCard notification={notification.clone()} />
                        </li>
                    }) }
                </ul>
            }
        </div>
    }
}
