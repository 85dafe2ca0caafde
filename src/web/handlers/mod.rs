//! HTML handlers for the login flow and the protected pages.

mod login;
mod pages;
mod token;

pub use login::login_handler;
pub use pages::{secret_handler, test_handler};
pub use token::{LoginForm, token_handler};
