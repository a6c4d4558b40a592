use actix_web::{get, post, web, HttpRequest, Responder};
use uuid::Uuid;

use crate::web::forms::NoticeQuery;
use crate::web::helpers::{render, require_user, see_other};
use crate::web::state::AppState;
use crate::web::templates::HistoryTemplate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(history_page).service(delete_itinerary);
}

#[get("/history")]
pub async fn history_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<NoticeQuery>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let notice = query.notice.as_deref().map(|code| match code {
        "created" => "Your itinerary has been created.".to_string(),
        "deleted" => "Itinerary deleted successfully.".to_string(),
        other => other.to_string(),
    });

    match state.backend.list_itineraries(uid).await {
        Ok(itineraries) => render(HistoryTemplate {
            logged_in: true,
            itineraries,
            notice,
            error: None,
        }),
        Err(err) => {
            log::error!("Failed to list itineraries for user {uid}: {err}");
            render(HistoryTemplate {
                logged_in: true,
                itineraries: Vec::new(),
                notice: None,
                error: Some(err.to_string()),
            })
        }
    }
}

#[post("/history/{id}/delete")]
pub async fn delete_itinerary(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    match state.backend.delete_itinerary(id, uid).await {
        // Full refetch via redirect; no optimistic removal.
        Ok(()) => see_other("/history?notice=deleted"),
        Err(err) => {
            log::error!("Failed to delete itinerary {id} for user {uid}: {err}");
            let itineraries = state.backend.list_itineraries(uid).await.unwrap_or_default();
            render(HistoryTemplate {
                logged_in: true,
                itineraries,
                notice: None,
                error: Some(err.to_string()),
            })
        }
    }
}
