pub use feedback::*;
pub use itinerary::*;
pub use user::*;

mod feedback;
mod itinerary;
mod user;
