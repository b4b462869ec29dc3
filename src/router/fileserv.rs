use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, Uri},
    response::{IntoResponse, Response as AxumResponse},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::shell;
use crate::model::AppState;

pub async fn file_and_error_handler(
    uri: Uri,
    State(state): State<AppState>,
    req: Request<Body>,
) -> AxumResponse {
    let options = state.leptos_options;
    let root = options.site_root.clone();
    let res = get_static_file(uri, root.as_ref()).await;

    if res.status() == StatusCode::OK {
        res.into_response()
    } else {
        let handler = leptos_axum::render_app_to_stream(move || shell(options.clone()));
        handler(req).await.into_response()
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Response<Body> {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    // This path is relative to the cargo root
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => res.into_response(),
    }
}
