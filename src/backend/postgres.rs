use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use crate::backend::Backend;
use crate::common::{AuthError, BackendError, GeneralError};
use crate::models::{
    Feedback, FeedbackCreate, Itinerary, ItineraryCreate, User, UserCreate,
};
use crate::services::PasswordManager;

/// Postgres-backed implementation of the backend collaborator.
pub struct PgBackend {
    pool: PgPool,
}

/// Credential row for sign-in; the only query that reads the hash back.
#[derive(sqlx::FromRow)]
struct UserAuthRow {
    id: Uuid,
    email: String,
    full_name: Option<String>,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl PgBackend {
    pub async fn connect(database_url: &str) -> Result<Self, GeneralError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn add_user(&self, data: &UserCreate) -> Result<Option<User>, BackendError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, full_name)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, full_name, created_at
            "#,
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.full_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl Backend for PgBackend {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<User, AuthError> {
        let data = UserCreate {
            email: email.to_lowercase(),
            password_hash: PasswordManager::hash_password(password)?,
            full_name: Some(full_name.to_string()),
        };

        match self.add_user(&data).await? {
            Some(user) => Ok(user),
            None => Err(AuthError::EmailTaken),
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let row = sqlx::query_as::<_, UserAuthRow>(
            r#"
            SELECT id, email, full_name, password_hash, created_at
            FROM users WHERE email = $1
            "#,
        )
        .bind(email.to_lowercase())
        .fetch_optional(&self.pool)
        .await
        .map_err(BackendError::from)?;

        // Verify against a dummy hash when the email is unknown so the
        // response time does not reveal which accounts exist.
        let stored_hash = row
            .as_ref()
            .map(|r| r.password_hash.as_str())
            .unwrap_or_else(|| PasswordManager::dummy_hash());

        let password_valid =
            PasswordManager::verify_password(password, stored_hash).unwrap_or(false);

        match row {
            Some(r) if password_valid => Ok(User {
                id: r.id,
                email: r.email,
                full_name: r.full_name,
                created_at: r.created_at,
            }),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, BackendError> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, email, full_name, created_at FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_itinerary(
        &self,
        data: ItineraryCreate,
    ) -> Result<Itinerary, BackendError> {
        let row = sqlx::query_as::<_, Itinerary>(
            r#"
            INSERT INTO itineraries (user_id, title, destination, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(data.user_id)
        .bind(&data.title)
        .bind(&data.destination)
        .bind(data.start_date)
        .bind(data.end_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_itineraries(&self, user_id: Uuid) -> Result<Vec<Itinerary>, BackendError> {
        let rows = sqlx::query_as::<_, Itinerary>(
            r#"
            SELECT * FROM itineraries
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn delete_itinerary(&self, id: Uuid, user_id: Uuid) -> Result<(), BackendError> {
        let result =
            sqlx::query(r#"DELETE FROM itineraries WHERE id = $1 AND user_id = $2"#)
                .bind(id)
                .bind(user_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(BackendError::Internal("Itinerary not found".into()));
        }

        Ok(())
    }

    async fn insert_feedback(&self, data: FeedbackCreate) -> Result<Feedback, BackendError> {
        let row = sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedback (user_id, comment, rating)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(data.user_id)
        .bind(&data.comment)
        .bind(data.rating)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_feedback(&self, user_id: Uuid) -> Result<Vec<Feedback>, BackendError> {
        let rows = sqlx::query_as::<_, Feedback>(
            r#"
            SELECT * FROM feedback
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
