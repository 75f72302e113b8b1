//! Storefront State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Car, CarDetails, MediaItem, Review};
use crate::rental::RentalDraft;

/// Load state of one remote resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Phase::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

/// Identifier handed out when a detail fetch starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient banner message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Storefront view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct StorefrontState {
    /// Every car returned by the last successful list fetch
    pub cars: Vec<Car>,
    /// `cars` narrowed by `search_term`
    pub filtered_cars: Vec<Car>,
    /// Last applied search term
    pub search_term: String,
    pub list_phase: Phase,
    /// Car shown in the detail card
    pub selected_car: Option<Car>,
    pub reviews: Vec<Review>,
    pub media: Vec<MediaItem>,
    pub detail_phase: Phase,
    /// Latest detail fetch issued; older responses are stale
    pub latest_detail_request: u64,
    pub rental_draft: RentalDraft,
    pub rental_phase: Phase,
    pub notice: Option<Notice>,
    pub notice_counter: u64,
}

/// Type alias for the store
pub type AppStore = Store<StorefrontState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Each helper writes only the fields it changes so subscribers of other
// fields are not re-run.

/// Mark the car list as loading
pub fn store_begin_list_load(store: &AppStore) {
    *store.list_phase().write() = Phase::Loading;
}

/// Replace both the full and the filtered list, keeping the applied search
pub fn store_finish_list_load(store: &AppStore, cars: Vec<Car>) {
    let filtered = store.search_term().with_untracked(|term| filter_cars(&cars, term));
    *store.filtered_cars().write() = filtered;
    *store.cars().write() = cars;
    *store.list_phase().write() = Phase::Loaded;
}

/// Record a failed list fetch; the displayed lists stay as they were
pub fn store_fail_list_load(store: &AppStore, message: String) {
    *store.list_phase().write() = Phase::Failed(message);
}

/// Filter the loaded list by `term`; the selection is left alone
pub fn store_apply_search(store: &AppStore, term: &str) {
    let filtered = store.cars().with_untracked(|cars| filter_cars(cars, term));
    *store.search_term().write() = term.to_string();
    *store.filtered_cars().write() = filtered;
}

/// Start a detail fetch; the returned id must accompany its response
pub fn store_begin_detail_load(store: &AppStore) -> RequestId {
    let next = store.latest_detail_request().get_untracked() + 1;
    *store.latest_detail_request().write() = next;
    *store.detail_phase().write() = Phase::Loading;
    RequestId(next)
}

pub fn store_is_current_detail_request(store: &AppStore, request: RequestId) -> bool {
    request.0 == store.latest_detail_request().get_untracked()
}

/// Apply a detail response. Returns `false` (and changes nothing) when a
/// newer fetch has been issued since `request`.
pub fn store_finish_detail_load(store: &AppStore, request: RequestId, details: CarDetails) -> bool {
    if !store_is_current_detail_request(store, request) {
        return false;
    }
    *store.selected_car().write() = Some(details.car);
    *store.reviews().write() = details.reviews;
    *store.media().write() = details.media;
    *store.detail_phase().write() = Phase::Loaded;
    true
}

/// Record a failed detail fetch; the previous selection stays displayed
pub fn store_fail_detail_load(store: &AppStore, request: RequestId, message: String) -> bool {
    if !store_is_current_detail_request(store, request) {
        return false;
    }
    *store.detail_phase().write() = Phase::Failed(message);
    true
}

pub fn store_begin_rental(store: &AppStore) {
    *store.rental_phase().write() = Phase::Loading;
}

/// Reservation accepted: the draft is discarded
pub fn store_finish_rental(store: &AppStore) {
    *store.rental_draft().write() = RentalDraft::default();
    *store.rental_phase().write() = Phase::Loaded;
}

pub fn store_fail_rental(store: &AppStore, message: String) {
    *store.rental_phase().write() = Phase::Failed(message);
}

/// Show a banner; returns its id for later dismissal
pub fn store_raise_notice(store: &AppStore, kind: NoticeKind, message: impl Into<String>) -> u64 {
    let id = store.notice_counter().get_untracked() + 1;
    *store.notice_counter().write() = id;
    *store.notice().write() = Some(Notice {
        id,
        kind,
        message: message.into(),
    });
    id
}

/// Clear the notice only if it is still the one with `id`
pub fn store_dismiss_notice(store: &AppStore, id: u64) {
    let current = store.notice().with_untracked(|n| n.as_ref().is_some_and(|n| n.id == id));
    if current {
        *store.notice().write() = None;
    }
}

/// Cars whose name contains `term`, case-insensitively, in original order
pub fn filter_cars(cars: &[Car], term: &str) -> Vec<Car> {
    if term.is_empty() {
        return cars.to_vec();
    }
    let needle = term.to_lowercase();
    cars.iter().filter(|car| car.name_matches(&needle)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use leptos::reactive::effect::ImmediateEffect;

    use super::*;

    fn make_car(id: u32, name: &str) -> Car {
        Car { id, name: name.to_string(), description: vec![], image: None }
    }

    fn make_details(id: u32) -> CarDetails {
        CarDetails {
            car: make_car(id, &format!("Car {}", id)),
            reviews: vec![Review { id, rating: 4.0, comment: format!("review {}", id) }],
            media: vec![MediaItem {
                id,
                url: format!("/uploads/{}.jpg", id),
                alternative_text: None,
            }],
        }
    }

    fn new_store() -> AppStore {
        Store::new(StorefrontState::default())
    }

    fn names(cars: &[Car]) -> Vec<String> {
        cars.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let cars = vec![make_car(1, "Tesla Model 3"), make_car(2, "BMW i3"), make_car(3, "tesla roadster")];
        assert_eq!(names(&filter_cars(&cars, "TESLA")), vec!["Tesla Model 3", "tesla roadster"]);
        assert_eq!(filter_cars(&cars, "").len(), 3);
        assert!(filter_cars(&cars, "audi").is_empty());
    }

    #[test]
    fn test_list_load_replaces_both_lists() {
        let store = new_store();
        store_begin_list_load(&store);
        assert!(store.list_phase().get_untracked().is_loading());

        store_finish_list_load(&store, vec![make_car(1, "A"), make_car(2, "B")]);
        assert_eq!(store.cars().get_untracked().len(), 2);
        assert_eq!(store.filtered_cars().get_untracked().len(), 2);
        assert_eq!(store.list_phase().get_untracked(), Phase::Loaded);
    }

    #[test]
    fn test_list_reload_reapplies_search_term() {
        let store = new_store();
        store_finish_list_load(&store, vec![make_car(1, "Tesla"), make_car(2, "BMW")]);
        store_apply_search(&store, "tes");

        store_finish_list_load(&store, vec![make_car(3, "BMW X5"), make_car(4, "Tesla Y")]);

        assert_eq!(store.search_term().get_untracked(), "tes");
        assert_eq!(names(&store.filtered_cars().get_untracked()), vec!["Tesla Y"]);
        assert_eq!(store.cars().get_untracked().len(), 2);
    }

    #[test]
    fn test_list_failure_keeps_previous_lists() {
        let store = new_store();
        store_finish_list_load(&store, vec![make_car(1, "A")]);
        store_fail_list_load(&store, "offline".to_string());

        assert_eq!(store.cars().get_untracked().len(), 1);
        assert_eq!(store.filtered_cars().get_untracked().len(), 1);
        assert_eq!(store.list_phase().get_untracked().error(), Some("offline"));
    }

    #[test]
    fn test_search_keeps_selection_and_full_list() {
        let store = new_store();
        store_finish_list_load(&store, vec![make_car(1, "Tesla"), make_car(2, "BMW")]);
        let request = store_begin_detail_load(&store);
        store_finish_detail_load(&store, request, make_details(2));

        store_apply_search(&store, "tesla");

        assert_eq!(names(&store.filtered_cars().get_untracked()), vec!["Tesla"]);
        assert_eq!(store.cars().get_untracked().len(), 2);
        assert_eq!(store.selected_car().get_untracked().map(|c| c.id), Some(2));
    }

    #[test]
    fn test_empty_search_restores_full_list() {
        let store = new_store();
        store_finish_list_load(&store, vec![make_car(1, "Tesla"), make_car(2, "BMW")]);
        store_apply_search(&store, "bmw");
        store_apply_search(&store, "");
        assert_eq!(store.filtered_cars().get_untracked().len(), 2);
    }

    #[test]
    fn test_detail_load_replaces_previous_car_resources() {
        let store = new_store();
        let first = store_begin_detail_load(&store);
        assert!(store_finish_detail_load(&store, first, make_details(1)));
        let second = store_begin_detail_load(&store);
        assert!(store_finish_detail_load(&store, second, make_details(2)));

        assert_eq!(store.selected_car().get_untracked().map(|c| c.id), Some(2));
        assert_eq!(store.reviews().get_untracked()[0].id, 2);
        assert_eq!(store.media().get_untracked().len(), 1);
        assert_eq!(store.media().get_untracked()[0].id, 2);
    }

    #[test]
    fn test_stale_detail_response_is_discarded() {
        let store = new_store();
        let first = store_begin_detail_load(&store);
        let second = store_begin_detail_load(&store);
        assert!(store_finish_detail_load(&store, second, make_details(2)));
        assert!(!store_finish_detail_load(&store, first, make_details(1)));
        assert_eq!(store.selected_car().get_untracked().map(|c| c.id), Some(2));
    }

    #[test]
    fn test_stale_detail_failure_is_ignored() {
        let store = new_store();
        let first = store_begin_detail_load(&store);
        let second = store_begin_detail_load(&store);
        assert!(!store_fail_detail_load(&store, first, "boom".to_string()));
        assert!(store.detail_phase().get_untracked().is_loading());
        assert!(store_finish_detail_load(&store, second, make_details(2)));
        assert_eq!(store.detail_phase().get_untracked(), Phase::Loaded);
    }

    #[test]
    fn test_detail_failure_keeps_selection() {
        let store = new_store();
        let first = store_begin_detail_load(&store);
        store_finish_detail_load(&store, first, make_details(1));
        let second = store_begin_detail_load(&store);
        assert!(store_fail_detail_load(&store, second, "not found".to_string()));

        assert_eq!(store.selected_car().get_untracked().map(|c| c.id), Some(1));
        assert_eq!(store.detail_phase().get_untracked().error(), Some("not found"));
    }

    #[test]
    fn test_finished_rental_discards_draft() {
        let store = new_store();
        store.rental_draft().write().rental_time = "2024-05-01T10:00".to_string();
        store_begin_rental(&store);
        store_finish_rental(&store);

        assert_eq!(store.rental_draft().get_untracked(), RentalDraft::default());
        assert_eq!(store.rental_phase().get_untracked(), Phase::Loaded);
    }

    #[test]
    fn test_dismiss_only_clears_matching_notice() {
        let store = new_store();
        let first = store_raise_notice(&store, NoticeKind::Success, "one");
        let second = store_raise_notice(&store, NoticeKind::Error, "two");
        assert_ne!(first, second);

        store_dismiss_notice(&store, first);
        assert_eq!(store.notice().get_untracked().map(|n| n.id), Some(second));

        store_dismiss_notice(&store, second);
        assert!(store.notice().get_untracked().is_none());
    }

    #[test]
    fn test_notices_do_not_notify_media_subscribers() {
        let store = new_store();
        let runs = Arc::new(AtomicUsize::new(0));
        let _effect = ImmediateEffect::new({
            let runs = Arc::clone(&runs);
            move || {
                store.media().track();
                runs.fetch_add(1, Ordering::SeqCst);
            }
        });
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        let id = store_raise_notice(&store, NoticeKind::Success, "Rental confirmed!");
        store_dismiss_notice(&store, id);
        store_apply_search(&store, "tesla");
        store_begin_rental(&store);
        store_finish_rental(&store);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        let request = store_begin_detail_load(&store);
        store_finish_detail_load(&store, request, make_details(1));
        assert!(runs.load(Ordering::SeqCst) > 1);
    }
}
