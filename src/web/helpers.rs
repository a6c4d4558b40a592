use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;
use uuid::Uuid;

use crate::backend::Backend;
use crate::models::User;

pub const SESSION_COOKIE: &str = "wp_uid";

/// Current session, if any: the signed-in user's id from the session cookie.
pub fn current_user_id(req: &HttpRequest) -> Option<Uuid> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty())
        .and_then(|s| Uuid::parse_str(&s).ok())
}

/// Route guard: every protected screen calls this first, so unauthenticated
/// visits redirect to /auth before any content is rendered.
pub fn require_user(req: &HttpRequest) -> Result<Uuid, HttpResponse> {
    match current_user_id(req) {
        Some(uid) => Ok(uid),
        None => Err(see_other("/auth")),
    }
}

/// Hydrate the session's user. A cookie pointing at a deleted account is
/// treated as signed out rather than as an error.
pub async fn load_user(
    backend: &dyn Backend,
    uid: Uuid,
) -> Result<User, HttpResponse> {
    match backend.get_user(uid).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => {
            let mut resp = see_other("/auth");
            let _ = resp.add_cookie(&clear_session_cookie());
            Err(resp)
        }
        Err(e) => {
            log::error!("Failed to load user {uid}: {e}");
            Err(HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Something went wrong. Please try again."))
        }
    }
}

pub fn session_cookie(uid: Uuid) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, uid.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {e}");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Something went wrong rendering this page.")
        }
    }
}
