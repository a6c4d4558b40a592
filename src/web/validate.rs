//! Local form validation. Everything here runs before any backend call; a
//! validation failure renders field-level messages and never leaves the
//! process.

use chrono::NaiveDate;

use crate::models::{trip_dates_from_day_count, RATING_MAX, RATING_MIN};
use crate::web::forms::{FeedbackForm, ItineraryForm, LoginForm, SignupForm};
use crate::web::security::validate_email;

pub const PASSWORD_MIN_CHARS: usize = 6;
pub const NAME_MIN_CHARS: usize = 2;
pub const DAY_COUNT_MAX: u32 = 365;

const DATE_FMT: &str = "%Y-%m-%d";

#[derive(Debug, Default, Eq, PartialEq)]
pub struct AuthFieldErrors {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl AuthFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Eq, PartialEq)]
pub struct SignupData {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

pub fn validate_login(form: &LoginForm) -> Result<LoginData, AuthFieldErrors> {
    let mut errors = AuthFieldErrors::default();
    let email = form.email.trim().to_string();

    if !validate_email(&email) {
        errors.email = Some("Invalid email address".into());
    }
    if form.password.chars().count() < PASSWORD_MIN_CHARS {
        errors.password =
            Some(format!("Password must be at least {PASSWORD_MIN_CHARS} characters"));
    }

    if errors.is_empty() {
        Ok(LoginData {
            email,
            password: form.password.clone(),
        })
    } else {
        Err(errors)
    }
}

pub fn validate_signup(form: &SignupForm) -> Result<SignupData, AuthFieldErrors> {
    let full_name = form.full_name.trim().to_string();

    let mut errors = match validate_login(&LoginForm {
        email: form.email.clone(),
        password: form.password.clone(),
    }) {
        Ok(_) => AuthFieldErrors::default(),
        Err(e) => e,
    };

    if full_name.chars().count() < NAME_MIN_CHARS {
        errors.full_name =
            Some(format!("Name must be at least {NAME_MIN_CHARS} characters"));
    }

    if errors.is_empty() {
        Ok(SignupData {
            full_name,
            email: form.email.trim().to_string(),
            password: form.password.clone(),
        })
    } else {
        Err(errors)
    }
}

#[derive(Debug, Default, Eq, PartialEq)]
pub struct ItineraryFieldErrors {
    pub title: Option<String>,
    pub destination: Option<String>,
    pub dates: Option<String>,
    pub days: Option<String>,
}

impl ItineraryFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.destination.is_none()
            && self.dates.is_none()
            && self.days.is_none()
    }
}

/// A validated itinerary: concrete dates, whichever input variant supplied
/// them.
#[derive(Debug, Eq, PartialEq)]
pub struct NewTrip {
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Accepts either an explicit date range or a day count starting today.
/// The two variants are alternatives; supplying both is an error.
pub fn validate_itinerary(
    form: &ItineraryForm,
    today: NaiveDate,
) -> Result<NewTrip, ItineraryFieldErrors> {
    let mut errors = ItineraryFieldErrors::default();

    let title = form.title.trim().to_string();
    let destination = form.destination.trim().to_string();
    if title.is_empty() {
        errors.title = Some("Trip title is required".into());
    }
    if destination.is_empty() {
        errors.destination = Some("Destination is required".into());
    }

    let start_raw = form.start_date.trim();
    let end_raw = form.end_date.trim();
    let days_raw = form.days.trim();

    let range = if !days_raw.is_empty() {
        if !start_raw.is_empty() || !end_raw.is_empty() {
            errors.days =
                Some("Enter either a day count or an explicit date range, not both".into());
            None
        } else {
            match days_raw.parse::<u32>() {
                Ok(days) if (1..=DAY_COUNT_MAX).contains(&days) => {
                    Some(trip_dates_from_day_count(today, days))
                }
                _ => {
                    errors.days = Some(format!(
                        "Day count must be a whole number between 1 and {DAY_COUNT_MAX}"
                    ));
                    None
                }
            }
        }
    } else if start_raw.is_empty() || end_raw.is_empty() {
        errors.dates = Some("Pick start and end dates, or a day count".into());
        None
    } else {
        let start = NaiveDate::parse_from_str(start_raw, DATE_FMT);
        let end = NaiveDate::parse_from_str(end_raw, DATE_FMT);
        match (start, end) {
            (Ok(start), Ok(end)) if end >= start => Some((start, end)),
            (Ok(_), Ok(_)) => {
                errors.dates = Some("End date must not be before the start date".into());
                None
            }
            _ => {
                errors.dates = Some("Dates must be in YYYY-MM-DD format".into());
                None
            }
        }
    };

    match range {
        Some((start_date, end_date)) if errors.is_empty() => Ok(NewTrip {
            title,
            destination,
            start_date,
            end_date,
        }),
        _ => Err(errors),
    }
}

#[derive(Debug, Default, Eq, PartialEq)]
pub struct FeedbackFieldErrors {
    pub comment: Option<String>,
    pub rating: Option<String>,
}

impl FeedbackFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.comment.is_none() && self.rating.is_none()
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct NewFeedback {
    pub comment: String,
    pub rating: Option<i32>,
}

pub fn validate_feedback(form: &FeedbackForm) -> Result<NewFeedback, FeedbackFieldErrors> {
    let mut errors = FeedbackFieldErrors::default();

    let comment = form.comment.trim().to_string();
    if comment.is_empty() {
        errors.comment = Some("Please enter your feedback".into());
    }

    let rating = match form.rating.trim() {
        "" => None,
        raw => match raw.parse::<i32>() {
            Ok(r) if (RATING_MIN..=RATING_MAX).contains(&r) => Some(r),
            _ => {
                errors.rating = Some(format!(
                    "Rating must be between {RATING_MIN} and {RATING_MAX}"
                ));
                None
            }
        },
    };

    if errors.is_empty() {
        Ok(NewFeedback { comment, rating })
    } else {
        Err(errors)
    }
}
