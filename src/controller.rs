//! Storefront Controller
//!
//! The five user-facing operations: list cars, load one car's details,
//! search, book a rental and the (inert) newsletter signup. Remote calls go
//! through [`CarRentalApi`]; state changes go through the store helpers.

use leptos::prelude::*;

use crate::api::CarRentalApi;
use crate::error::{ApiError, DraftError};
use crate::store::{
    store_apply_search, store_begin_detail_load, store_begin_list_load, store_begin_rental, store_fail_detail_load,
    store_fail_list_load, store_fail_rental, store_finish_detail_load, store_finish_list_load, store_finish_rental,
    store_raise_notice, AppStore, NoticeKind, StorefrontStateStoreFields,
};

pub const RENTAL_CONFIRMED: &str = "Rental confirmed!";

/// Why a rental submission did not go through
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RentalError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// View-state controller
#[derive(Clone)]
pub struct Storefront<A> {
    api: A,
    store: AppStore,
}

impl<A: CarRentalApi> Storefront<A> {
    pub fn new(api: A, store: AppStore) -> Self {
        Self { api, store }
    }

    /// Fetch all cars. On failure the displayed list is left untouched.
    pub async fn load_cars(&self) -> Result<(), ApiError> {
        store_begin_list_load(&self.store);
        match self.api.list_cars().await {
            Ok(cars) => {
                log::info!("Loaded {} cars", cars.len());
                store_finish_list_load(&self.store, cars);
                Ok(())
            }
            Err(err) => {
                log::error!("Error fetching cars: {}", err);
                store_fail_list_load(&self.store, err.to_string());
                store_raise_notice(&self.store, NoticeKind::Error, format!("Could not load cars. {}", err));
                Err(err)
            }
        }
    }

    /// Fetch one car with its reviews and media.
    ///
    /// Responses for a selection that has since been superseded are dropped.
    pub async fn load_car_details(&self, id: u32) -> Result<(), ApiError> {
        let request = store_begin_detail_load(&self.store);
        match self.api.get_car_details(id).await {
            Ok(details) => {
                if store_finish_detail_load(&self.store, request, details) {
                    log::debug!("Showing details for car {}", id);
                } else {
                    log::debug!("Discarded stale details for car {}", id);
                }
                Ok(())
            }
            Err(err) => {
                log::error!("Error fetching car details for {}: {}", id, err);
                if store_fail_detail_load(&self.store, request, err.to_string()) {
                    store_raise_notice(
                        &self.store,
                        NoticeKind::Error,
                        format!("Could not load car details. {}", err),
                    );
                }
                Err(err)
            }
        }
    }

    /// Narrow the displayed list; never touches the network
    pub fn apply_search(&self, term: &str) {
        store_apply_search(&self.store, term);
    }

    /// Book the current rental draft for `car_id`
    pub async fn submit_rental(&self, car_id: u32) -> Result<(), RentalError> {
        let request = match self.store.rental_draft().with_untracked(|draft| draft.to_request(car_id)) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("Rental draft rejected: {}", err);
                store_fail_rental(&self.store, err.to_string());
                store_raise_notice(&self.store, NoticeKind::Error, err.to_string());
                return Err(err.into());
            }
        };

        store_begin_rental(&self.store);
        match self.api.create_rental(&request).await {
            Ok(()) => {
                log::info!("Rental booked: car={} days={}", request.car, request.rental_days);
                store_finish_rental(&self.store);
                store_raise_notice(&self.store, NoticeKind::Success, RENTAL_CONFIRMED);
                Ok(())
            }
            Err(err) => {
                log::error!("Error making rental: {}", err);
                store_fail_rental(&self.store, err.to_string());
                store_raise_notice(&self.store, NoticeKind::Error, format!("Rental failed. {}", err));
                Err(err.into())
            }
        }
    }

    /// Newsletter signup has no backing endpoint; nothing is sent or stored.
    pub fn subscribe_newsletter(&self, email: &str) {
        log::debug!("Newsletter signup for {:?} not sent: no endpoint configured", email);
    }
}
