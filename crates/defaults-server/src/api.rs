use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub(crate) mod handlers;

/// Build the webhook router.
///
/// The two mutation endpoints map 1:1 to the webhook registrations in
/// `deploy/webhook.yaml`: the API server routes PersistentVolumeClaim
/// reviews to `/mutate/pvc` and Pod reviews to `/mutate/pod`. The engine
/// itself dispatches on the kind declared in the request body, so a review
/// landing on the "wrong" endpoint is still handled correctly.
pub fn app() -> Router {
    Router::new()
        .route("/mutate/pvc", post(handlers::mutate_pvc_handler))
        .route("/mutate/pod", post(handlers::mutate_pod_handler))
        .route("/readiness", get(handlers::readiness_handler))
        .layer(TraceLayer::new_for_http())
}
