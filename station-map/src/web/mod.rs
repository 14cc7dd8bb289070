//! Web layer for the charging-station map.
//!
//! Every user action on the page is a GET route that drives one controller
//! event and redirects back to the page.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
