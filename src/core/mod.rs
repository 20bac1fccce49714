//! Core validation logic, independent of any transport

pub mod cpf;
pub mod error;

pub use cpf::{CPF_LENGTH, Cpf, check_digit, is_valid_cpf, normalize};
pub use error::{ConfigError, CpfError, RequestError};
