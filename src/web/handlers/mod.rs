pub mod auth;
pub mod dashboard;
pub mod feedback;
pub mod history;
pub mod public;

pub use public::not_found;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    auth::configure(cfg);
    dashboard::configure(cfg);
    history::configure(cfg);
    feedback::configure(cfg);
}
