//! HTTP Client
//!
//! `reqwest`-backed implementation of [`CarRentalApi`]. On wasm32 reqwest
//! goes through the browser's `fetch`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::wire::{error_message, CarAttributes, Entry, Envelope, RentalRequest};
use super::CarRentalApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Car, CarDetails};

// ========================
// Paths
// ========================

const CARS_PATH: &str = "/api/cars?populate=*";
const RENTALS_PATH: &str = "/api/rentals";

fn car_details_path(id: u32) -> String {
    format!("/api/cars/{}?populate=reviews,media", id)
}

/// Content API client over HTTP
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Endpoint this client talks to
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.config.api_url(path);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Map a non-2xx response to [`ApiError::Status`]
async fn ensure_success(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = match error_message(&body) {
        m if m.is_empty() => status.canonical_reason().unwrap_or("Unknown error").to_string(),
        m => m,
    };
    Err(ApiError::Status { status: status.as_u16(), message })
}

#[async_trait(?Send)]
impl CarRentalApi for HttpApi {
    async fn list_cars(&self) -> ApiResult<Vec<Car>> {
        let envelope: Envelope<Vec<Entry<CarAttributes>>> = self.get_json(CARS_PATH).await?;
        Ok(envelope.data.into_iter().map(Car::from).collect())
    }

    async fn get_car_details(&self, id: u32) -> ApiResult<CarDetails> {
        let envelope: Envelope<Entry<CarAttributes>> = self.get_json(&car_details_path(id)).await?;
        Ok(CarDetails::from(envelope.data))
    }

    async fn create_rental(&self, request: &RentalRequest) -> ApiResult<()> {
        let url = self.config.api_url(RENTALS_PATH);
        log::debug!("POST {} car={}", url, request.car);
        let response = self.client.post(&url).json(request).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_urls() {
        let config = ApiConfig::default();
        assert_eq!(config.api_url(CARS_PATH), "http://localhost:1337/api/cars?populate=*");
        assert_eq!(
            config.api_url(&car_details_path(42)),
            "http://localhost:1337/api/cars/42?populate=reviews,media"
        );
        assert_eq!(config.api_url(RENTALS_PATH), "http://localhost:1337/api/rentals");
    }

    #[test]
    fn test_cloned_client_keeps_endpoint() {
        let api = HttpApi::new(ApiConfig::new("https://cms.example.com/"));
        let shared = api.clone();
        assert_eq!(shared.config().base_url(), "https://cms.example.com");
        assert_eq!(
            shared.config().asset_url("/uploads/golf.jpg"),
            "https://cms.example.com/uploads/golf.jpg"
        );
    }
}
