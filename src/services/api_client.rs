use gloo_net::http::{Request, Response};

use crate::config::BACKEND_URL;
use crate::models::loyalty::{
    AddActivityRequest, AddPointsRequest, DiscountCard, LoyaltyProfile, LoyaltyTier,
};
use crate::models::notification::{Notification, NotificationsResponse, SendNotificationRequest};
use crate::models::product::{
    CategoriesResponse, Category, Product, ProductFilter, ProductResponse, ProductsResponse,
};
use crate::models::store::{Store, StoreResponse, StoresResponse};
use crate::models::user::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile,
};

/// API client - HTTP communication only (stateless). One method per
/// backend operation; no retries, no caching.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, String> {
        let url = format!("{}/users/register", self.base_url);

        log::info!("📝 Registering user: {}", request.username);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }
        response
            .json::<RegisterResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, String> {
        let url = format!("{}/users/login", self.base_url);

        log::info!("🔐 Logging in: {}", request.email);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn get_user_profile(&self, user_id: u32) -> Result<UserProfile, String> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        self.get_json::<UserProfile>(&url).await
    }

    pub async fn get_loyalty_profile(&self, user_id: u32) -> Result<LoyaltyProfile, String> {
        let url = format!("{}/users/{}/loyalty", self.base_url, user_id);
        self.get_json::<LoyaltyProfile>(&url).await
    }

    pub async fn add_loyalty_points(
        &self,
        user_id: u32,
        request: &AddPointsRequest,
    ) -> Result<(), String> {
        let url = format!("{}/users/{}/loyalty/points", self.base_url, user_id);

        log::info!("⭐ Adding {} points for user {}", request.points, user_id);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }
        Ok(())
    }

    pub async fn add_loyalty_activity(
        &self,
        user_id: u32,
        request: &AddActivityRequest,
    ) -> Result<(), String> {
        let url = format!("{}/users/{}/loyalty/activity", self.base_url, user_id);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }
        Ok(())
    }

    /// Tiers come back as a bare array, no envelope.
    pub async fn get_loyalty_tiers(&self) -> Result<Vec<LoyaltyTier>, String> {
        let url = format!("{}/loyalty/tiers", self.base_url);
        self.get_json::<Vec<LoyaltyTier>>(&url).await
    }

    pub async fn get_discount_card(&self, user_id: u32) -> Result<DiscountCard, String> {
        let url = format!("{}/users/{}/discount-card", self.base_url, user_id);
        self.get_json::<DiscountCard>(&url).await
    }

    pub async fn update_discount_card(
        &self,
        user_id: u32,
        card: &DiscountCard,
    ) -> Result<(), String> {
        let url = format!("{}/users/{}/discount-card", self.base_url, user_id);

        log::info!("💳 Updating discount card for user {}", user_id);

        let response = Request::put(&url)
            .json(card)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }
        Ok(())
    }

    /// Raw PNG bytes, not JSON.
    pub async fn get_qr_code(&self, user_id: u32) -> Result<Vec<u8>, String> {
        let url = format!("{}/users/{}/qrcode", self.base_url, user_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }
        response
            .binary()
            .await
            .map_err(|e| format!("Read error: {}", e))
    }

    pub async fn get_stores(&self) -> Result<Vec<Store>, String> {
        let url = format!("{}/stores", self.base_url);
        let response = self.get_json::<StoresResponse>(&url).await?;
        Ok(response.stores)
    }

    pub async fn get_store(&self, store_id: u32) -> Result<Store, String> {
        let url = format!("{}/stores/{}", self.base_url, store_id);
        let response = self.get_json::<StoreResponse>(&url).await?;
        Ok(response.store)
    }

    /// Catalog listing. Only non-empty filters end up in the query.
    pub async fn get_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, String> {
        let url = format!("{}/products{}", self.base_url, filter.query_string());
        let response = self.get_json::<ProductsResponse>(&url).await?;
        Ok(response.products)
    }

    pub async fn get_product(&self, product_id: u32) -> Result<Product, String> {
        let url = format!("{}/products/{}", self.base_url, product_id);
        let response = self.get_json::<ProductResponse>(&url).await?;
        Ok(response.product)
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, String> {
        let url = format!("{}/categories", self.base_url);
        let response = self.get_json::<CategoriesResponse>(&url).await?;
        Ok(response.categories)
    }

    pub async fn send_notification(
        &self,
        request: &SendNotificationRequest,
    ) -> Result<(), String> {
        let url = format!("{}/notifications", self.base_url);

        log::info!("🔔 Sending notification to user {}", request.user_id);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }
        Ok(())
    }

    pub async fn get_notifications(&self, user_id: u32) -> Result<Vec<Notification>, String> {
        let url = format!("{}/notifications/{}", self.base_url, user_id);
        let response = self.get_json::<NotificationsResponse>(&url).await?;
        Ok(response.notifications)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, String> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Failure message for a non-2xx response: the server's `error` field
/// when the body carries one, the raw body otherwise.
async fn error_message(response: Response) -> String {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    format!("HTTP {}: {}", status, describe_failure(&body, &status_text))
}

fn describe_failure(body: &str, status_text: &str) -> String {
    if let Some(server_error) = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
    {
        return server_error;
    }
    let body = body.trim();
    if body.is_empty() {
        status_text.to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_field_is_preferred() {
        assert_eq!(
            describe_failure(r#"{"error": "user not found"}"#, "Not Found"),
            "user not found"
        );
    }

    #[test]
    fn non_json_body_is_surfaced_verbatim() {
        assert_eq!(
            describe_failure("failed to get stores: db down\n", "Internal Server Error"),
            "failed to get stores: db down"
        );
    }

    #[test]
    fn empty_body_falls_back_to_status_text() {
        assert_eq!(describe_failure("", "Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn json_without_error_field_keeps_raw_body() {
        assert_eq!(
            describe_failure(r#"{"detail": "nope"}"#, "Bad Request"),
            r#"{"detail": "nope"}"#
        );
    }
}
