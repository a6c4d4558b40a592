use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

/// A user-submitted comment with an optional 1-5 rating. Read-only once
/// created; there is no edit or delete path.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Feedback {
    pub id: Uuid,
    pub user_id: Uuid,
    pub comment: String,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn created_label(&self) -> String {
        self.created_at.format("%b %d, %Y").to_string()
    }
}

#[derive(Debug, Clone)]
pub struct FeedbackCreate {
    pub user_id: Uuid,
    pub comment: String,
    pub rating: Option<i32>,
}
