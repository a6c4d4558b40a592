use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::backend::Backend;
use crate::common::{AuthError, BackendError};
use crate::models::{
    Feedback, FeedbackCreate, Itinerary, ItineraryCreate, User, RATING_MAX, RATING_MIN,
};
use crate::services::PasswordManager;

/// In-memory backend for tests and databaseless demo runs. Rows are kept in
/// insertion order, which is also chronological order, so "newest first" is
/// a reverse scan.
#[derive(Default)]
pub struct MemoryBackend {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    users: Vec<StoredUser>,
    itineraries: Vec<Itinerary>,
    feedback: Vec<Feedback>,
}

struct StoredUser {
    user: User,
    password_hash: String,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<User, AuthError> {
        let email = email.to_lowercase();
        let password_hash = PasswordManager::hash_password(password)?;

        let mut inner = self.lock();

        if inner.users.iter().any(|s| s.user.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: Uuid::new_v4(),
            email,
            full_name: Some(full_name.to_string()),
            created_at: Utc::now(),
        };
        inner.users.push(StoredUser {
            user: user.clone(),
            password_hash,
        });

        Ok(user)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.to_lowercase();
        let (user, stored_hash) = {
            let inner = self.lock();
            match inner.users.iter().find(|s| s.user.email == email) {
                Some(s) => (Some(s.user.clone()), s.password_hash.clone()),
                None => (None, PasswordManager::dummy_hash().to_string()),
            }
        };

        let password_valid =
            PasswordManager::verify_password(password, &stored_hash).unwrap_or(false);

        match user {
            Some(user) if password_valid => Ok(user),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, BackendError> {
        let inner = self.lock();
        Ok(inner
            .users
            .iter()
            .find(|s| s.user.id == id)
            .map(|s| s.user.clone()))
    }

    async fn insert_itinerary(
        &self,
        data: ItineraryCreate,
    ) -> Result<Itinerary, BackendError> {
        if data.end_date < data.start_date {
            return Err(BackendError::Internal(
                "end_date must not precede start_date".into(),
            ));
        }

        let row = Itinerary {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            title: data.title,
            destination: data.destination,
            start_date: data.start_date,
            end_date: data.end_date,
            created_at: Utc::now(),
        };

        self.lock().itineraries.push(row.clone());
        Ok(row)
    }

    async fn list_itineraries(&self, user_id: Uuid) -> Result<Vec<Itinerary>, BackendError> {
        let inner = self.lock();
        Ok(inner
            .itineraries
            .iter()
            .rev()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_itinerary(&self, id: Uuid, user_id: Uuid) -> Result<(), BackendError> {
        let mut inner = self.lock();
        let before = inner.itineraries.len();
        inner
            .itineraries
            .retain(|i| !(i.id == id && i.user_id == user_id));

        if inner.itineraries.len() == before {
            return Err(BackendError::Internal("Itinerary not found".into()));
        }

        Ok(())
    }

    async fn insert_feedback(&self, data: FeedbackCreate) -> Result<Feedback, BackendError> {
        if data.rating.is_some_and(|r| !(RATING_MIN..=RATING_MAX).contains(&r)) {
            return Err(BackendError::Internal("rating out of range".into()));
        }

        let row = Feedback {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            comment: data.comment,
            rating: data.rating,
            created_at: Utc::now(),
        };

        self.lock().feedback.push(row.clone());
        Ok(row)
    }

    async fn list_feedback(&self, user_id: Uuid) -> Result<Vec<Feedback>, BackendError> {
        let inner = self.lock();
        Ok(inner
            .feedback
            .iter()
            .rev()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seed_user(backend: &MemoryBackend) -> User {
        backend
            .sign_up("traveler@example.com", "secret1", "Test Traveler")
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn test_sign_up_rejects_duplicate_email() {
        let backend = MemoryBackend::new();
        seed_user(&backend).await;

        let err = backend
            .sign_up("Traveler@Example.com", "other-password", "Someone Else")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[actix_web::test]
    async fn test_sign_in_rejects_wrong_password_and_unknown_email() {
        let backend = MemoryBackend::new();
        seed_user(&backend).await;

        let err = backend
            .sign_in("traveler@example.com", "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));

        let err = backend.sign_in("nobody@example.com", "secret1").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[actix_web::test]
    async fn test_itineraries_list_newest_first_and_delete_removes() {
        let backend = MemoryBackend::new();
        let user = seed_user(&backend).await;

        for title in ["Jaipur", "Agra", "Varanasi"] {
            backend
                .insert_itinerary(ItineraryCreate {
                    user_id: user.id,
                    title: title.into(),
                    destination: "India".into(),
                    start_date: date(2026, 4, 1),
                    end_date: date(2026, 4, 5),
                })
                .await
                .unwrap();
        }

        let rows = backend.list_itineraries(user.id).await.unwrap();
        let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Varanasi", "Agra", "Jaipur"]);

        backend.delete_itinerary(rows[1].id, user.id).await.unwrap();
        let rows = backend.list_itineraries(user.id).await.unwrap();
        let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Varanasi", "Jaipur"]);
    }

    #[actix_web::test]
    async fn test_delete_is_scoped_to_the_owner() {
        let backend = MemoryBackend::new();
        let owner = seed_user(&backend).await;
        let other = backend
            .sign_up("other@example.com", "secret2", "Other User")
            .await
            .unwrap();

        let row = backend
            .insert_itinerary(ItineraryCreate {
                user_id: owner.id,
                title: "Kerala Backwaters".into(),
                destination: "Kerala, India".into(),
                start_date: date(2026, 5, 10),
                end_date: date(2026, 5, 17),
            })
            .await
            .unwrap();

        assert!(backend.delete_itinerary(row.id, other.id).await.is_err());
        assert_eq!(backend.list_itineraries(owner.id).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_feedback_rating_round_trips_unchanged() {
        let backend = MemoryBackend::new();
        let user = seed_user(&backend).await;

        backend
            .insert_feedback(FeedbackCreate {
                user_id: user.id,
                comment: "Loved the trip planner".into(),
                rating: Some(5),
            })
            .await
            .unwrap();

        let rows = backend.list_feedback(user.id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rating, Some(5));
        assert_eq!(rows[0].comment, "Loved the trip planner");
    }
}
