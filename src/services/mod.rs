pub use auth::PasswordManager;

mod auth;
