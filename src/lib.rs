//! Superheroes REST API: heroes, powers, and their strength-rated links.
//!
//! The crate splits along the request path: [`routes`] wires URLs to
//! [`handlers`], handlers speak to SQLite through [`store`], and every
//! response body is an explicit projection from [`response`]. Failures
//! funnel through [`error::AppError`], which owns the wire format for
//! every non-2xx body.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use error::AppError;
pub use models::{Hero, HeroPower, Power, Strength, ValidationError};
pub use routes::app_router;
pub use state::AppState;
pub use store::Store;
