use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Notification {
    pub id: u32,
    #[serde(default)]
    pub user_id: Option<u32>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: Option<String>,
    pub message: String,
    // Wire name is created_at; some deployments still send timestamp.
    #[serde(alias = "timestamp")]
    pub created_at: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SendNotificationRequest {
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_accepts_either_timestamp_name() {
        let with_created_at: Notification = serde_json::from_str(
            r#"{"id": 1, "type": "promotion", "message": "Sale on now",
                "created_at": "2025-11-02T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(with_created_at.created_at, "2025-11-02T10:00:00Z");
        assert_eq!(with_created_at.kind, "promotion");

        let with_timestamp: Notification = serde_json::from_str(
            r#"{"id": 2, "type": "new_arrival", "message": "New coats",
                "timestamp": "2025-11-03T09:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(with_timestamp.created_at, "2025-11-03T09:30:00Z");
    }

    #[test]
    fn send_request_serializes_type_field() {
        let body = serde_json::to_string(&SendNotificationRequest {
            user_id: "1".to_string(),
            kind: "promotion".to_string(),
            title: "Weekend sale".to_string(),
            message: "20% off suits".to_string(),
        })
        .unwrap();
        assert!(body.contains(r#""type":"promotion""#));
        assert!(!body.contains("kind"));
    }
}
