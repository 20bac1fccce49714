//! HTTP server exposing the CPF validator
//!
//! This module provides:
//! - The request adapter mapping query/body input to a validation verdict
//! - The route table (CPF endpoint + health checks)
//! - A `ServerBuilder` that assembles and serves the router

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::{CpfQuery, CpfVerdict, resolve_candidate, validate_cpf};
pub use router::build_routes;
