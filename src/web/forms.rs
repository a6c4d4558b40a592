use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Itinerary creation input. Dates and the day count arrive as raw strings
/// so that empty fields deserialize cleanly and invalid input can be echoed
/// back into the form.
#[derive(Deserialize)]
pub struct ItineraryForm {
    pub title: String,
    pub destination: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub days: String,
}

#[derive(Deserialize)]
pub struct FeedbackForm {
    pub comment: String,
    #[serde(default)]
    pub rating: String,
}

#[derive(Deserialize)]
pub struct AuthQuery {
    pub mode: Option<String>,
    pub notice: Option<String>,
}

#[derive(Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}
