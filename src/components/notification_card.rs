use chrono::DateTime;
use yew::prelude::*;

use crate::models::Notification;

#[derive(Properties, PartialEq, Clone)]
pub struct NotificationCardProps {
    pub notification: Notification,
}

#[function_component(NotificationCard)]
pub fn notification_card(props: &NotificationCardProps) -> Html {
    let notification = &props.notification;

    let kind_class = match notification.kind.as_str() {
        "promotion" => "notification-promotion",
        "new_arrival" => "notification-new-arrival",
        _ => "notification-info",
    };

    html! {
        <div class={classes!("notification-card", kind_class)}>
            <div class="notification-content">
                if let Some(title) = &notification.title {
                    <h3 class="notification-title">{title}</h3>
                }
                <p class="notification-message">
                    <strong>{format!("{}: ", notification.kind)}</strong>
                    {&notification.message}
                </p>
                <span class="notification-timestamp">
                    {format_timestamp(&notification.created_at)}
                </span>
            </div>
        </div>
    }
}

/// RFC 3339 timestamps render as a local-style date; anything else is
/// shown as received.
fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_timestamps_are_reformatted() {
        assert_eq!(
            format_timestamp("2025-11-02T10:30:00Z"),
            "2025-11-02 10:30"
        );
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
