use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{config::FirebaseConfig, AppState};

/// `GET /get-firebase-config/` — Firebase connection parameters for the
/// frontend SDK.
///
/// Serving these from the backend keeps them out of the checked-in
/// JavaScript. The values are opaque to this service: copied verbatim from
/// startup configuration, never validated or transformed. The request itself
/// carries no inputs — query string and body are ignored.
pub async fn get_firebase_config(
    State(state): State<AppState>,
) -> (StatusCode, Json<FirebaseConfig>) {
    info!("Served firebase config");
    (StatusCode::OK, Json(state.firebase.as_ref().clone()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use crate::{build_router, config::FirebaseConfig, AppState};

    fn test_state() -> AppState {
        AppState {
            firebase: Arc::new(FirebaseConfig {
                api_key: "AIza123".to_string(),
                auth_domain: "app.firebaseapp.com".to_string(),
                project_id: "app-1".to_string(),
                storage_bucket: "app-1.appspot.com".to_string(),
                messaging_sender_id: "1234567890".to_string(),
                app_id: "1:1234567890:web:abcdef".to_string(),
            }),
            static_dir: Arc::new("static".into()),
        }
    }

    async fn body_bytes(uri: &str) -> (u16, Vec<u8>) {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status().as_u16();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn returns_configured_values_as_json() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/get-firebase-config/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("application/json"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            r#"{"apiKey":"AIza123","authDomain":"app.firebaseapp.com","projectId":"app-1","storageBucket":"app-1.appspot.com","messagingSenderId":"1234567890","appId":"1:1234567890:web:abcdef"}"#
        );
    }

    #[tokio::test]
    async fn repeated_calls_are_byte_identical() {
        let (status_a, body_a) = body_bytes("/get-firebase-config/").await;
        let (status_b, body_b) = body_bytes("/get-firebase-config/").await;
        assert_eq!(status_a, 200);
        assert_eq!(status_b, 200);
        assert_eq!(body_a, body_b);
    }

    #[tokio::test]
    async fn query_string_is_ignored() {
        let (_, plain) = body_bytes("/get-firebase-config/").await;
        let (status, with_query) =
            body_bytes("/get-firebase-config/?debug=1&cache_bust=xyz").await;
        assert_eq!(status, 200);
        assert_eq!(plain, with_query);
    }

    #[tokio::test]
    async fn request_body_is_ignored() {
        let (_, plain) = body_bytes("/get-firebase-config/").await;

        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/get-firebase-config/")
                    .body(Body::from(r#"{"unexpected":"payload"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let with_body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(plain, with_body.to_vec());
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (status, _) = body_bytes("/nope").await;
        assert_eq!(status, 404);
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let (status, body) = body_bytes("/health").await;
        assert_eq!(status, 200);
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "ok");
    }
}
