pub use memory::MemoryBackend;
pub use postgres::PgBackend;

mod memory;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::common::{AuthError, BackendError};
use crate::models::{Feedback, FeedbackCreate, Itinerary, ItineraryCreate, User};

/// The persistence/auth service every screen delegates to. Screens hold no
/// state of their own beyond the form being rendered; anything durable goes
/// through here.
///
/// Sign-out is not an operation on this trait: sessions live in a cookie the
/// web layer owns, so signing out is clearing that cookie.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Create an account. A duplicate email yields [`AuthError::EmailTaken`].
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<User, AuthError>;

    /// Verify credentials. Unknown email and wrong password are
    /// indistinguishable to the caller ([`AuthError::InvalidCredentials`]).
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Session hydration: resolve a stored user id back to a user, if the
    /// account still exists.
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, BackendError>;

    async fn insert_itinerary(
        &self,
        data: ItineraryCreate,
    ) -> Result<Itinerary, BackendError>;

    /// All itineraries belonging to `user_id`, newest first.
    async fn list_itineraries(&self, user_id: Uuid) -> Result<Vec<Itinerary>, BackendError>;

    /// Delete one itinerary, scoped to its owner.
    async fn delete_itinerary(&self, id: Uuid, user_id: Uuid) -> Result<(), BackendError>;

    async fn insert_feedback(&self, data: FeedbackCreate) -> Result<Feedback, BackendError>;

    /// All feedback submitted by `user_id`, newest first.
    async fn list_feedback(&self, user_id: Uuid) -> Result<Vec<Feedback>, BackendError>;
}
