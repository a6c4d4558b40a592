use actix_web::{get, post, web, HttpRequest, Responder};
use chrono::Local;

use crate::models::ItineraryCreate;
use crate::web::forms::ItineraryForm;
use crate::web::helpers::{load_user, render, require_user, see_other};
use crate::web::state::AppState;
use crate::web::templates::DashboardTemplate;
use crate::web::validate::{validate_itinerary, ItineraryFieldErrors};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard_page).service(create_itinerary);
}

#[get("/dashboard")]
pub async fn dashboard_page(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };
    let user = match load_user(state.backend.as_ref(), uid).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    render(DashboardTemplate::blank(user.display_name()))
}

#[post("/dashboard")]
pub async fn create_itinerary(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ItineraryForm>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };
    let user = match load_user(state.backend.as_ref(), uid).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    // Re-render with the entered values preserved on any failure.
    let filled = |errors: ItineraryFieldErrors, error: Option<String>| DashboardTemplate {
        logged_in: true,
        user_name: user.display_name().to_string(),
        title: form.title.clone(),
        destination: form.destination.clone(),
        start_date: form.start_date.clone(),
        end_date: form.end_date.clone(),
        days: form.days.clone(),
        errors,
        error,
    };

    let today = Local::now().date_naive();
    let trip = match validate_itinerary(&form, today) {
        Ok(trip) => trip,
        Err(errors) => return render(filled(errors, None)),
    };

    let data = ItineraryCreate {
        user_id: uid,
        title: trip.title,
        destination: trip.destination,
        start_date: trip.start_date,
        end_date: trip.end_date,
    };

    match state.backend.insert_itinerary(data).await {
        Ok(row) => {
            log::info!("User {uid} created itinerary {}", row.id);
            see_other("/history?notice=created")
        }
        Err(err) => {
            log::error!("Itinerary insert failed for user {uid}: {err}");
            render(filled(ItineraryFieldErrors::default(), Some(err.to_string())))
        }
    }
}
