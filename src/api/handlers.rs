//! HTTP API handlers.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::config::Config;

/// Banner reported by the root endpoint.
pub const API_NAME: &str = "CI/CD Playground API";

/// Values reported by the handlers, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    /// Application version.
    pub version: String,
    /// Deployment environment name.
    pub environment: String,
}

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    info: Arc<AppInfo>,
}

impl AppState {
    /// Create app state from the reported version and environment.
    pub fn new(version: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            info: Arc::new(AppInfo {
                version: version.into(),
                environment: environment.into(),
            }),
        }
    }

    /// Build app state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.app_version.clone(), config.environment.clone())
    }

    /// Reported application version.
    pub fn version(&self) -> &str {
        &self.info.version
    }

    /// Reported environment name.
    pub fn environment(&self) -> &str {
        &self.info.environment
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Root info response.
#[derive(Debug, Serialize)]
pub struct RootResponse<'a> {
    /// Service banner.
    pub message: &'static str,
    /// Application version.
    pub version: &'a str,
    /// Environment name.
    pub environment: &'a str,
    /// Always "healthy".
    pub status: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse<'a> {
    /// Status: "ok".
    pub status: &'static str,
    /// Application version.
    pub version: &'a str,
}

/// A demo user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Numeric user id.
    pub id: u32,
    /// Display name.
    pub name: &'static str,
    /// Contact address.
    pub email: &'static str,
}

/// User list response.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    /// Users in id order.
    pub users: Vec<User>,
}

/// System status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse<'a> {
    /// Literal, no database is checked.
    pub database: &'static str,
    /// Literal, no cache is checked.
    pub cache: &'static str,
    /// Environment name.
    pub environment: &'a str,
}

/// The fixed demo users, in id order.
pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Alice",
            email: "alice@example.com",
        },
        User {
            id: 2,
            name: "Bob",
            email: "bob@example.com",
        },
    ]
}

/// Root handler - service banner, version and environment.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(RootResponse {
        message: API_NAME,
        version: state.version(),
        environment: state.environment(),
        status: "healthy",
    })
    .into_response()
}

/// Health check handler - always returns 200.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: state.version(),
    })
    .into_response()
}

/// User list handler - returns the demo users.
pub async fn list_users() -> impl IntoResponse {
    Json(UsersResponse {
        users: demo_users(),
    })
    .into_response()
}

/// Status handler - returns the literal subsystem report.
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    Json(StatusResponse {
        database: "connected",
        cache: "active",
        environment: state.environment(),
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_reports_configured_values() {
        let state = AppState::new("9.9.9", "production");

        assert_eq!(state.version(), "9.9.9");
        assert_eq!(state.environment(), "production");
    }

    #[test]
    fn clones_share_the_same_info() {
        let state = AppState::new("1.2.3", "staging");
        let clone = state.clone();

        assert!(Arc::ptr_eq(&state.info, &clone.info));
    }

    #[test]
    fn default_state_uses_config_defaults() {
        let state = AppState::default();

        assert_eq!(state.version(), "1.0.0");
        assert_eq!(state.environment(), "development");
    }

    #[test]
    fn demo_users_are_in_id_order() {
        let ids: Vec<u32> = demo_users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn root_response_serializes_fields_in_order() {
        let body = serde_json::to_string(&RootResponse {
            message: API_NAME,
            version: "1.0.0",
            environment: "development",
            status: "healthy",
        })
        .unwrap();

        assert_eq!(
            body,
            r#"{"message":"CI/CD Playground API","version":"1.0.0","environment":"development","status":"healthy"}"#
        );
    }
}
