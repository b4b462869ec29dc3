pub mod fileserv;
pub use fileserv::*;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{AxumRouteListing, LeptosRoutes};

use crate::app::shell;
use crate::model::AppState;

pub fn new(leptos_routes: Vec<AxumRouteListing>, app_state: AppState) -> Router {
    Router::new()
        .leptos_routes_with_context(
            &app_state,
            leptos_routes,
            {
                let state = app_state.clone();
                move || provide_context(state.clone())
            },
            {
                let options = app_state.leptos_options.clone();
                move || shell(options.clone())
            },
        )
        .fallback(file_and_error_handler)
        .with_state(app_state)
}
