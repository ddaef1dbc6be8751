//! # Health Endpoint
//!
//! A single `GET /` answering with a static string, polled by the hosting
//! platform to decide whether the bot is alive.

use axum::{Router, routing::get};

pub const AVAILABILITY: &str = "Coffee Bot is running!";

pub fn router() -> Router {
    Router::new().route("/", get(health_check))
}

/// Serves the health endpoint until the process exits.
pub async fn serve(addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("{}", crate::strings::logs::health_listening(addr));
    axum::serve(listener, router()).await?;
    Ok(())
}

async fn health_check() -> &'static str {
    AVAILABILITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_body() {
        assert_eq!(health_check().await, AVAILABILITY);
    }

    #[tokio::test]
    async fn test_serve_answers_get() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router()).await });

        let body = reqwest::get(format!("http://{addr}/"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, AVAILABILITY);
    }
}
