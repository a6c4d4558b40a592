use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user-owned trip record. Invariant: `end_date >= start_date`, enforced
/// by form validation and by a check constraint in the store.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Itinerary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Itinerary {
    /// Inclusive trip length: a one-day trip starts and ends on the same day.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn date_range_label(&self) -> String {
        format!(
            "{} - {}",
            self.start_date.format("%b %d, %Y"),
            self.end_date.format("%b %d, %Y")
        )
    }

    pub fn created_label(&self) -> String {
        self.created_at.format("%b %d, %Y").to_string()
    }
}

#[derive(Debug, Clone)]
pub struct ItineraryCreate {
    pub user_id: Uuid,
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Date range for a trip that starts today and spans `days` days
/// (`days` must be at least 1).
pub fn trip_dates_from_day_count(
    today: NaiveDate,
    days: u32,
) -> (NaiveDate, NaiveDate) {
    let end = today + Days::new(u64::from(days.saturating_sub(1)));
    (today, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_count_of_one_is_a_same_day_trip() {
        let today = date(2026, 3, 14);
        let (start, end) = trip_dates_from_day_count(today, 1);
        assert_eq!(start, today);
        assert_eq!(end, today);
    }

    #[test]
    fn test_day_count_of_seven_ends_six_days_out() {
        let today = date(2026, 3, 14);
        let (start, end) = trip_dates_from_day_count(today, 7);
        assert_eq!(start, today);
        assert_eq!(end, date(2026, 3, 20));
    }

    #[test]
    fn test_day_count_crosses_month_boundary() {
        let (_, end) = trip_dates_from_day_count(date(2026, 1, 30), 5);
        assert_eq!(end, date(2026, 2, 3));
    }

    #[test]
    fn test_duration_days_is_inclusive() {
        let trip = Itinerary {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Golden Triangle Tour".into(),
            destination: "Rajasthan, India".into(),
            start_date: date(2026, 3, 14),
            end_date: date(2026, 3, 20),
            created_at: Utc::now(),
        };
        assert_eq!(trip.duration_days(), 7);
    }
}
