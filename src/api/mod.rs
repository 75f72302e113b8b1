//! Content API Bindings
//!
//! Calls against the headless content/rental API, organized behind a trait
//! so the controller can run against the real HTTP client or a test double.

mod http;
mod wire;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Car, CarDetails};

pub use http::HttpApi;
pub use wire::RentalRequest;

/// Remote operations the storefront needs
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait CarRentalApi {
    /// `GET /api/cars?populate=*`
    async fn list_cars(&self) -> ApiResult<Vec<Car>>;

    /// `GET /api/cars/{id}?populate=reviews,media`
    async fn get_car_details(&self, id: u32) -> ApiResult<CarDetails>;

    /// `POST /api/rentals`
    async fn create_rental(&self, request: &RentalRequest) -> ApiResult<()>;
}
