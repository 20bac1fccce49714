//! # CPF Validator
//!
//! Validation of Brazilian CPF numbers (Cadastro de Pessoas Físicas) and a
//! small HTTP service exposing it.
//!
//! ## Features
//!
//! - **Pure validator**: [`is_valid_cpf`](core::cpf::is_valid_cpf) has no I/O and no state
//! - **Mask tolerant**: `529.982.247-25` and `52998224725` are the same CPF
//! - **Typed rejections**: [`Cpf::parse`](core::cpf::Cpf::parse) says which check failed
//! - **HTTP endpoint**: GET/POST with `?cpf=` or a plain-text body
//! - **Configuration-Based**: YAML file plus `CPF_*` environment overrides
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cpf::prelude::*;
//!
//! assert!(is_valid_cpf("529.982.247-25"));
//!
//! ServerBuilder::new()
//!     .with_config(ServerConfig::load(None)?)
//!     .serve()
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod server;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        cpf::{CPF_LENGTH, Cpf, check_digit, is_valid_cpf, normalize},
        error::{ConfigError, CpfError, MISSING_CPF_MESSAGE, RequestError},
    };

    // === Config ===
    pub use crate::config::{HttpConfig, LogFormat, LoggingConfig, ServerConfig};

    // === Server ===
    pub use crate::logging::init_tracing;
    pub use crate::server::{CpfQuery, CpfVerdict, ServerBuilder, build_routes};

    // === External dependencies ===
    pub use anyhow::Result;
}
