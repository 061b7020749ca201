//! Route definitions for the `/periods` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::periods;
use crate::state::AppState;

/// Routes mounted at `/periods`.
///
/// ```text
/// GET    /current   -> current
/// POST   /close     -> close
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/current", get(periods::current))
        .route("/close", post(periods::close))
}
