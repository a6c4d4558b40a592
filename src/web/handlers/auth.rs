use std::time::Duration;

use actix_web::{get, post, web, HttpRequest, Responder};

use crate::common::AuthError;
use crate::web::forms::{AuthQuery, LoginForm, SignupForm};
use crate::web::helpers::{
    clear_session_cookie, current_user_id, render, see_other, session_cookie,
};
use crate::web::state::AppState;
use crate::web::templates::AuthTemplate;
use crate::web::validate::{validate_login, validate_signup};

const LOGIN_MAX_ATTEMPTS: usize = 5;
const LOGIN_WINDOW: Duration = Duration::from_secs(300);

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth_page)
        .service(login_submit)
        .service(signup_submit)
        .service(logout);
}

/// One screen, two modes: Login by default, Signup via `?mode=signup`.
#[get("/auth")]
pub async fn auth_page(
    req: HttpRequest,
    query: web::Query<AuthQuery>,
) -> impl Responder {
    // Signed-in visitors skip the auth screen entirely.
    if current_user_id(&req).is_some() {
        return see_other("/dashboard");
    }

    let mut page = if query.mode.as_deref() == Some("signup") {
        AuthTemplate::signup()
    } else {
        AuthTemplate::login()
    };

    page.notice = query.notice.as_deref().map(|code| match code {
        "account_created" => "Account created. Sign in to start planning.".to_string(),
        "signed_out" => "You have been signed out.".to_string(),
        other => other.to_string(),
    });

    render(page)
}

fn login_page_with(email: &str) -> AuthTemplate {
    let mut page = AuthTemplate::login();
    page.email = email.to_string();
    page
}

fn signup_page_with(full_name: &str, email: &str) -> AuthTemplate {
    let mut page = AuthTemplate::signup();
    page.full_name = full_name.to_string();
    page.email = email.to_string();
    page
}

#[post("/auth/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    if !state.rate_limiter.check_rate_limit(
        &format!("login:{client_ip}"),
        LOGIN_MAX_ATTEMPTS,
        LOGIN_WINDOW,
    ) {
        let mut page = login_page_with(&form.email);
        page.error =
            Some("Too many login attempts. Please wait a few minutes and try again.".into());
        return render(page);
    }

    // Local validation happens before any backend call.
    let data = match validate_login(&form) {
        Ok(data) => data,
        Err(errors) => {
            let mut page = login_page_with(&form.email);
            page.errors = errors;
            return render(page);
        }
    };

    match state.backend.sign_in(&data.email, &data.password).await {
        Ok(user) => {
            log::info!("User {} signed in", user.id);
            let mut resp = see_other("/dashboard");
            let _ = resp.add_cookie(&session_cookie(user.id));
            resp
        }
        Err(err @ AuthError::InvalidCredentials) => {
            let mut page = login_page_with(&form.email);
            page.error = Some(err.to_string());
            render(page)
        }
        Err(err) => {
            log::error!("Login failed: {err}");
            let mut page = login_page_with(&form.email);
            page.error = Some("Sign-in is unavailable right now. Please try again.".into());
            render(page)
        }
    }
}

#[post("/auth/signup")]
pub async fn signup_submit(
    state: web::Data<AppState>,
    form: web::Form<SignupForm>,
) -> impl Responder {
    let data = match validate_signup(&form) {
        Ok(data) => data,
        Err(errors) => {
            let mut page = signup_page_with(&form.full_name, &form.email);
            page.errors = errors;
            return render(page);
        }
    };

    match state
        .backend
        .sign_up(&data.email, &data.password, &data.full_name)
        .await
    {
        // No auto-login: back to Login mode with a cleared form.
        Ok(user) => {
            log::info!("New account registered: {}", user.id);
            see_other("/auth?notice=account_created")
        }
        Err(err @ AuthError::EmailTaken) => {
            let mut page = signup_page_with(&form.full_name, &form.email);
            page.error = Some(err.to_string());
            render(page)
        }
        Err(err) => {
            log::error!("Signup failed: {err}");
            let mut page = signup_page_with(&form.full_name, &form.email);
            page.error = Some("Sign-up is unavailable right now. Please try again.".into());
            render(page)
        }
    }
}

#[post("/auth/logout")]
pub async fn logout() -> impl Responder {
    let mut resp = see_other("/");
    let _ = resp.add_cookie(&clear_session_cookie());
    resp
}
