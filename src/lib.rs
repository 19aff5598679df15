//! CI/CD Playground API.
//!
//! A small JSON service used as the workload for CI/CD pipeline experiments.
//! Four fixed routes report the service banner, health, a demo user list
//! and a literal system status. The only inputs are `APP_VERSION` and
//! `ENVIRONMENT`, read once at startup.
//!
//! ```text
//! GET /            {"message":"CI/CD Playground API","version":..,"environment":..,"status":"healthy"}
//! GET /health      {"status":"ok","version":..}
//! GET /api/users   {"users":[{"id":1,..},{"id":2,..}]}
//! GET /api/status  {"database":"connected","cache":"active","environment":..}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Startup error types
//! - [`api`]: HTTP handlers and router
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
