use axum::Json;
use serde::Serialize;

/// Fixed liveness body
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
    service: &'static str,
}

/// Health check handler
///
/// Never touches the provider, so it answers even without an API key.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: "speech-to-text-api",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_body_is_fixed() {
        let Json(body) = health_handler().await;
        let json = serde_json::to_value(body).unwrap();

        assert_eq!(json, serde_json::json!({"status": "healthy", "service": "speech-to-text-api"}));
    }
}
