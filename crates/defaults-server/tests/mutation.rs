use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use base64::{engine::general_purpose, Engine as _};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use defaults_server::api::app;

async fn post_review(endpoint: &str, body: Vec<u8>) -> Value {
    let request = Request::builder()
        .method(Method::POST)
        .uri(endpoint)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request should build");

    let response = app().oneshot(request).await.expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("response should be JSON")
}

fn review_body(kind: &str, object: Value) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "apiVersion": "admission.k8s.io/v1",
        "kind": "AdmissionReview",
        "request": {
            "uid": "705ab4f5-6393-11e8-b7cc-42010a800002",
            "kind": {"group": "", "version": "v1", "kind": kind},
            "operation": "CREATE",
            "object": object,
        },
    }))
    .expect("serialization should work")
}

fn decoded_patch(reply: &Value) -> Value {
    let patch = reply["response"]["patch"]
        .as_str()
        .expect("patch should be set");
    let payload = general_purpose::STANDARD
        .decode(patch)
        .expect("patch should be base64");
    serde_json::from_slice(&payload).expect("patch should be JSON")
}

#[tokio::test]
async fn pvc_without_a_storage_class_is_patched() {
    let body = review_body("PersistentVolumeClaim", json!({"spec": {}}));

    let reply = post_review("/mutate/pvc", body).await;

    assert_eq!(reply["response"]["uid"], "705ab4f5-6393-11e8-b7cc-42010a800002");
    assert_eq!(reply["response"]["allowed"], json!(true));
    assert_eq!(reply["response"]["patchType"], "JSONPatch");
    assert_eq!(
        decoded_patch(&reply),
        json!([{
            "op": "add",
            "path": "/spec/storageClassName",
            "value": "default-storage",
        }])
    );
}

#[tokio::test]
async fn pvc_with_a_storage_class_is_accepted_unchanged() {
    let body = review_body(
        "PersistentVolumeClaim",
        json!({"spec": {"storageClassName": "fast"}}),
    );

    let reply = post_review("/mutate/pvc", body).await;

    assert_eq!(reply["response"]["allowed"], json!(true));
    assert!(reply["response"].get("patch").is_none());
    assert!(reply["response"].get("patchType").is_none());
}

#[tokio::test]
async fn pod_containers_without_limits_are_patched_at_their_indices() {
    let body = review_body(
        "Pod",
        json!({
            "spec": {
                "containers": [
                    {"name": "a", "image": "nginx"},
                    {"name": "b", "resources": {"limits": {"cpu": "1"}}},
                    {"name": "c", "image": "redis"},
                ],
            },
        }),
    );

    let reply = post_review("/mutate/pod", body).await;
    let patch = decoded_patch(&reply);

    let paths: Vec<&str> = patch
        .as_array()
        .expect("patch should be an array")
        .iter()
        .map(|op| op["path"].as_str().expect("path should be a string"))
        .collect();
    assert_eq!(
        paths,
        vec![
            "/spec/containers/0/resources",
            "/spec/containers/2/resources",
        ]
    );
}

#[tokio::test]
async fn malformed_review_is_accepted_with_the_uid_echoed() {
    let body = serde_json::to_vec(&json!({
        "request": {"uid": "3ed7f41a"},
    }))
    .expect("serialization should work");

    let reply = post_review("/mutate/pvc", body).await;

    assert_eq!(reply["response"]["uid"], "3ed7f41a");
    assert_eq!(reply["response"]["allowed"], json!(true));
    assert!(reply["response"].get("patch").is_none());
}

#[tokio::test]
async fn undecodable_body_is_accepted() {
    let reply = post_review("/mutate/pod", b"not json".to_vec()).await;

    assert_eq!(reply["response"]["allowed"], json!(true));
}

#[tokio::test]
async fn readiness_endpoint_replies_ok() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/readiness")
        .body(Body::empty())
        .expect("request should build");

    let response = app().oneshot(request).await.expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);
}
