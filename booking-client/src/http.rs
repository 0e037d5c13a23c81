//! HTTP client for network-based API calls

use crate::service::{BookingService, CreatedReservation};
use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{DiscountRule, ExtraHoursOption, PricingTier, Product};
use shared::reservation::{
    DiscountResetRequest, ReservationCreateRequest, ReservationUpdateRequest,
};
use shared::ApiResponse;

/// HTTP client for making network requests to the booking service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn decorate(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        request.header("x-request-id", uuid::Uuid::new_v4().to_string())
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.decorate(self.client.get(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.decorate(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.decorate(self.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Unwrap the standard response envelope, treating a missing data
    /// field or a non-success code as an invalid response.
    fn unwrap_envelope<T>(response: ApiResponse<T>) -> ClientResult<T> {
        if !response.is_success() {
            return Err(ClientError::Internal(format!(
                "{}: {}",
                response.code, response.message
            )));
        }
        response
            .data
            .ok_or_else(|| ClientError::InvalidResponse("missing data field".to_string()))
    }
}

#[async_trait]
impl BookingService for HttpClient {
    async fn create_reservation(
        &self,
        request: &ReservationCreateRequest,
    ) -> ClientResult<CreatedReservation> {
        tracing::debug!(
            branch_id = request.branch_id,
            total = request.total_price,
            "Submitting reservation"
        );
        let response: ApiResponse<CreatedReservation> =
            self.post("/api/reservations", request).await?;
        Self::unwrap_envelope(response)
    }

    async fn update_reservation(
        &self,
        reservation_id: i64,
        request: &ReservationUpdateRequest,
    ) -> ClientResult<()> {
        tracing::debug!(
            reservation_id,
            entries = request.extra_hours.len(),
            "Updating reservation extra hours"
        );
        let response: ApiResponse<serde_json::Value> = self
            .put(&format!("/api/reservations/{}", reservation_id), request)
            .await?;
        if !response.is_success() {
            return Err(ClientError::Internal(format!(
                "{}: {}",
                response.code, response.message
            )));
        }
        Ok(())
    }

    async fn reset_discount_rule(&self, request: &DiscountResetRequest) -> ClientResult<()> {
        let response: ApiResponse<serde_json::Value> =
            self.post("/api/discount-rules/reset", request).await?;
        if !response.is_success() {
            return Err(ClientError::Internal(format!(
                "{}: {}",
                response.code, response.message
            )));
        }
        Ok(())
    }

    async fn fetch_pricing_tiers(&self, branch_id: i64) -> ClientResult<Vec<PricingTier>> {
        let response: ApiResponse<Vec<PricingTier>> = self
            .get(&format!("/api/branches/{}/pricing-tiers", branch_id))
            .await?;
        Self::unwrap_envelope(response)
    }

    async fn fetch_extra_hours(
        &self,
        branch_id: i64,
        customer_type_id: i64,
    ) -> ClientResult<Vec<ExtraHoursOption>> {
        let response: ApiResponse<Vec<ExtraHoursOption>> = self
            .get(&format!(
                "/api/branches/{}/customer-types/{}/extra-hours",
                branch_id, customer_type_id
            ))
            .await?;
        Self::unwrap_envelope(response)
    }

    async fn fetch_products(&self, branch_id: i64) -> ClientResult<Vec<Product>> {
        let response: ApiResponse<Vec<Product>> = self
            .get(&format!("/api/branches/{}/products", branch_id))
            .await?;
        Self::unwrap_envelope(response)
    }

    async fn fetch_discount_rules(&self, branch_id: i64) -> ClientResult<Vec<DiscountRule>> {
        let response: ApiResponse<Vec<DiscountRule>> = self
            .get(&format!("/api/branches/{}/discount-rules", branch_id))
            .await?;
        Self::unwrap_envelope(response)
    }
}
