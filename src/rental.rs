//! Rental Draft
//!
//! Client-side reservation form state and its validation into a request body.

use chrono::NaiveDateTime;

use crate::api::RentalRequest;
use crate::error::DraftError;

/// Formats produced by `<input type="datetime-local">`
const DATETIME_LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Pending reservation form fields (never persisted)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalDraft {
    /// Start time as entered, `YYYY-MM-DDTHH:MM`
    pub rental_time: String,
    pub rental_days: u32,
}

impl Default for RentalDraft {
    fn default() -> Self {
        Self {
            rental_time: String::new(),
            rental_days: 1,
        }
    }
}

impl RentalDraft {
    /// Parse the day-count input; anything that is not a whole number becomes 0
    /// and is rejected by [`RentalDraft::to_request`].
    pub fn set_days_input(&mut self, raw: &str) {
        self.rental_days = raw.trim().parse().unwrap_or(0);
    }

    /// Validate the draft for `car_id` and build the POST body.
    ///
    /// The entered time is sent as typed; parsing only checks it is a real date.
    pub fn to_request(&self, car_id: u32) -> Result<RentalRequest, DraftError> {
        let time = self.rental_time.trim();
        if time.is_empty() {
            return Err(DraftError::MissingTime);
        }
        parse_datetime_local(time)?;
        if self.rental_days < 1 {
            return Err(DraftError::InvalidDays);
        }
        Ok(RentalRequest {
            car: car_id,
            rental_time: time.to_string(),
            rental_days: self.rental_days,
        })
    }
}

fn parse_datetime_local(value: &str) -> Result<NaiveDateTime, DraftError> {
    DATETIME_LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| DraftError::InvalidTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(time: &str, days: u32) -> RentalDraft {
        RentalDraft { rental_time: time.to_string(), rental_days: days }
    }

    #[test]
    fn test_default_draft_is_one_day() {
        let d = RentalDraft::default();
        assert_eq!(d.rental_days, 1);
        assert!(d.rental_time.is_empty());
    }

    #[test]
    fn test_valid_draft_builds_request() {
        let request = draft("2026-11-02T09:30", 3).to_request(7).unwrap();
        assert_eq!(request.car, 7);
        assert_eq!(request.rental_time, "2026-11-02T09:30");
        assert_eq!(request.rental_days, 3);
    }

    #[test]
    fn test_seconds_are_accepted() {
        assert!(draft("2026-11-02T09:30:15", 1).to_request(1).is_ok());
    }

    #[test]
    fn test_missing_time_is_rejected() {
        assert_eq!(draft("", 2).to_request(1), Err(DraftError::MissingTime));
        assert_eq!(draft("   ", 2).to_request(1), Err(DraftError::MissingTime));
    }

    #[test]
    fn test_garbage_time_is_rejected() {
        assert_eq!(
            draft("next tuesday", 2).to_request(1),
            Err(DraftError::InvalidTime("next tuesday".to_string()))
        );
        assert!(matches!(draft("2026-02-30T10:00", 2).to_request(1), Err(DraftError::InvalidTime(_))));
    }

    #[test]
    fn test_zero_days_is_rejected() {
        assert_eq!(draft("2026-11-02T09:30", 0).to_request(1), Err(DraftError::InvalidDays));
    }

    #[test]
    fn test_days_input_parsing() {
        let mut d = RentalDraft::default();
        d.set_days_input(" 5 ");
        assert_eq!(d.rental_days, 5);
        d.set_days_input("-1");
        assert_eq!(d.rental_days, 0);
        d.set_days_input("");
        assert_eq!(d.rental_days, 0);
    }
}
