use askama::Template;

use crate::models::{Feedback, Itinerary};
use crate::web::validate::{AuthFieldErrors, FeedbackFieldErrors, ItineraryFieldErrors};

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub logged_in: bool,
}

#[derive(Template)]
#[template(path = "auth.html")]
pub struct AuthTemplate {
    pub is_login: bool,
    pub full_name: String,
    pub email: String,
    pub errors: AuthFieldErrors,
    pub notice: Option<String>,
    pub error: Option<String>,
}

impl AuthTemplate {
    pub fn login() -> Self {
        Self {
            is_login: true,
            full_name: String::new(),
            email: String::new(),
            errors: AuthFieldErrors::default(),
            notice: None,
            error: None,
        }
    }

    pub fn signup() -> Self {
        Self {
            is_login: false,
            ..Self::login()
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub logged_in: bool,
    pub user_name: String,
    pub title: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub days: String,
    pub errors: ItineraryFieldErrors,
    pub error: Option<String>,
}

impl DashboardTemplate {
    pub fn blank(user_name: &str) -> Self {
        Self {
            logged_in: true,
            user_name: user_name.to_string(),
            title: String::new(),
            destination: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            days: String::new(),
            errors: ItineraryFieldErrors::default(),
            error: None,
        }
    }
}

#[derive(Template)]
#[template(path = "history.html")]
pub struct HistoryTemplate {
    pub logged_in: bool,
    pub itineraries: Vec<Itinerary>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "feedback.html")]
pub struct FeedbackTemplate {
    pub logged_in: bool,
    pub entries: Vec<Feedback>,
    pub comment: String,
    pub rating: String,
    pub errors: FeedbackFieldErrors,
    pub notice: Option<String>,
    pub error: Option<String>,
}

impl FeedbackTemplate {
    pub fn new(entries: Vec<Feedback>) -> Self {
        Self {
            logged_in: true,
            entries,
            comment: String::new(),
            rating: String::new(),
            errors: FeedbackFieldErrors::default(),
            notice: None,
            error: None,
        }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;
