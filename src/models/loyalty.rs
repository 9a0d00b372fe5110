use serde::{Deserialize, Serialize};

/// Accumulated points and tier classification for one user.
/// Older backend revisions serve `current_points` / `loyalty_status`,
/// current ones `points` / `tier`; both are accepted.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoyaltyProfile {
    #[serde(alias = "current_points")]
    pub points: u32,
    #[serde(alias = "loyalty_status")]
    pub tier: String,
    #[serde(default)]
    pub current_tier: Option<LoyaltyTier>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoyaltyTier {
    pub id: u32,
    pub name: String,
    pub min_points: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub benefits: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AddPointsRequest {
    pub points: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AddActivityRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Discount level plus progress toward the next one. The PUT body for
/// updates is the same shape.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DiscountCard {
    pub discount_level: i32,
    pub progress_to_next_level: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loyalty_profile_accepts_both_wire_names() {
        let new_style: LoyaltyProfile =
            serde_json::from_str(r#"{"points": 120, "tier": "Silver"}"#).unwrap();
        assert_eq!(new_style.points, 120);
        assert_eq!(new_style.tier, "Silver");

        let old_style: LoyaltyProfile =
            serde_json::from_str(r#"{"current_points": 80, "loyalty_status": "Bronze"}"#).unwrap();
        assert_eq!(old_style.points, 80);
        assert_eq!(old_style.tier, "Bronze");
        assert!(old_style.current_tier.is_none());
    }

    #[test]
    fn tiers_deserialize_from_a_bare_array() {
        let json = r#"[
            {"id": 1, "name": "Bronze", "min_points": 0},
            {"id": 2, "name": "Silver", "min_points": 100, "benefits": "Free shipping"}
        ]"#;
        let tiers: Vec<LoyaltyTier> = serde_json::from_str(json).unwrap();
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[1].name, "Silver");
        assert_eq!(tiers[1].benefits.as_deref(), Some("Free shipping"));
        assert!(tiers[0].description.is_none());
    }

    #[test]
    fn add_points_request_uses_type_on_the_wire() {
        let body = serde_json::to_string(&AddPointsRequest {
            points: 50,
            kind: "purchase".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"points":50,"type":"purchase"}"#);
    }
}
