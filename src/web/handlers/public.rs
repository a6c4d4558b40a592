use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use askama::Template;

use crate::web::helpers::{current_user_id, render};
use crate::web::templates::{LandingTemplate, NotFoundTemplate};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(landing);
}

/// Landing/marketing page. Static content; the nav adapts to the session.
#[get("/")]
pub async fn landing(req: HttpRequest) -> impl Responder {
    render(LandingTemplate {
        logged_in: current_user_id(&req).is_some(),
    })
}

pub async fn not_found() -> HttpResponse {
    match (NotFoundTemplate {}).render() {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {e}");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Page not found")
        }
    }
}
