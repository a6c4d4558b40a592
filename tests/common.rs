use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::web::Data;

use wanderplan::backend::MemoryBackend;
use wanderplan::models::User;
use wanderplan::web::helpers::SESSION_COOKIE;
use wanderplan::web::AppState;

pub fn test_state() -> Data<AppState> {
    Data::new(AppState::new(Arc::new(MemoryBackend::new())))
}

pub async fn seed_user(state: &Data<AppState>) -> User {
    state
        .backend
        .sign_up("traveler@example.com", "secret1", "Test Traveler")
        .await
        .expect("Failed to seed test user")
}

pub fn session_for(user: &User) -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, user.id.to_string())
}
