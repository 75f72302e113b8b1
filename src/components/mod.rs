//! UI Components
//!
//! Leptos components rendering the storefront state.

mod search_bar;
mod car_list;
mod car_detail_card;
mod rental_form;
mod newsletter_form;
mod media_gallery;
mod notice_banner;

pub use search_bar::SearchBar;
pub use car_list::CarList;
pub use car_detail_card::CarDetailCard;
pub use rental_form::RentalForm;
pub use newsletter_form::NewsletterForm;
pub use media_gallery::MediaGallery;
pub use notice_banner::NoticeBanner;
