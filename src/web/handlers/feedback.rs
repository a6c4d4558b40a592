use actix_web::{get, post, web, HttpRequest, Responder};

use crate::models::FeedbackCreate;
use crate::web::forms::{FeedbackForm, NoticeQuery};
use crate::web::helpers::{render, require_user, see_other};
use crate::web::state::AppState;
use crate::web::templates::FeedbackTemplate;
use crate::web::validate::validate_feedback;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(feedback_page).service(submit_feedback);
}

#[get("/feedback")]
pub async fn feedback_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<NoticeQuery>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let notice = query.notice.as_deref().map(|code| match code {
        "submitted" => "Feedback submitted successfully.".to_string(),
        other => other.to_string(),
    });

    match state.backend.list_feedback(uid).await {
        Ok(entries) => {
            let mut page = FeedbackTemplate::new(entries);
            page.notice = notice;
            render(page)
        }
        Err(err) => {
            log::error!("Failed to list feedback for user {uid}: {err}");
            let mut page = FeedbackTemplate::new(Vec::new());
            page.error = Some(err.to_string());
            render(page)
        }
    }
}

#[post("/feedback")]
pub async fn submit_feedback(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<FeedbackForm>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    // On any failure the entered comment and rating are echoed back.
    let new_feedback = match validate_feedback(&form) {
        Ok(data) => data,
        Err(errors) => {
            let entries = state.backend.list_feedback(uid).await.unwrap_or_default();
            let mut page = FeedbackTemplate::new(entries);
            page.comment = form.comment.clone();
            page.rating = form.rating.clone();
            page.errors = errors;
            return render(page);
        }
    };

    let data = FeedbackCreate {
        user_id: uid,
        comment: new_feedback.comment,
        rating: new_feedback.rating,
    };

    match state.backend.insert_feedback(data).await {
        Ok(row) => {
            log::info!("User {uid} submitted feedback {}", row.id);
            see_other("/feedback?notice=submitted")
        }
        Err(err) => {
            log::error!("Feedback insert failed for user {uid}: {err}");
            let entries = state.backend.list_feedback(uid).await.unwrap_or_default();
            let mut page = FeedbackTemplate::new(entries);
            page.comment = form.comment.clone();
            page.rating = form.rating.clone();
            page.error = Some(err.to_string());
            render(page)
        }
    }
}
