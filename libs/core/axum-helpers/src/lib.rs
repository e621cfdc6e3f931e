//! # Axum Helpers
//!
//! Building blocks shared by the HTTP services.
//!
//! - [`server`]: router assembly with API docs, health checks, graceful shutdown
//! - [`http`]: CORS and security header middleware
//! - [`errors`]: structured JSON error responses with error codes
//! - [`extractors`]: integer path ids and validated JSON bodies
//! - [`audit`]: audit events for data modifications

pub mod audit;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use http::{cors_layer_from_env, create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, ValidatedJson};

pub use audit::{AuditEvent, AuditOutcome, extract_ip_from_headers, extract_user_agent};
