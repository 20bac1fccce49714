//! HTTP handler for the CPF validation endpoint

use crate::core::cpf::Cpf;
use crate::core::error::RequestError;
use axum::{
    body::Bytes,
    extract::Query,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

/// Query string accepted by the endpoint
///
/// ```text
/// GET /api/httpTriggerCpf?cpf=529.982.247-25
/// ```
#[derive(Debug, Clone, Default)]
pub struct CpfQuery {
    pub cpf: Option<String>,
}

impl CpfQuery {
    /// Keep the first `cpf` pair of a decoded query string
    ///
    /// Later repetitions of the parameter are ignored rather than rejected.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let cpf = pairs
            .into_iter()
            .find(|(key, _)| key == "cpf")
            .map(|(_, value)| value);
        Self { cpf }
    }
}

/// Outcome of validating a resolved candidate
///
/// Both variants carry the raw input as received, not its normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpfVerdict {
    Valid(String),
    Invalid(String),
}

impl CpfVerdict {
    /// Run the checksum on `input`
    pub fn evaluate(input: String) -> Self {
        match Cpf::parse(&input) {
            Ok(_) => CpfVerdict::Valid(input),
            Err(reason) => {
                tracing::debug!(%reason, "CPF rejected");
                CpfVerdict::Invalid(input)
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            CpfVerdict::Valid(_) => StatusCode::OK,
            CpfVerdict::Invalid(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CpfVerdict::Valid(cpf) => format!("O CPF {} é válido.", cpf),
            CpfVerdict::Invalid(cpf) => format!("O CPF {} é inválido.", cpf),
        }
    }
}

impl IntoResponse for CpfVerdict {
    fn into_response(self) -> Response {
        (self.status_code(), self.message()).into_response()
    }
}

/// Pick the candidate: a non-empty `cpf` query value, else a non-empty body
pub fn resolve_candidate(query: Option<String>, body: String) -> Option<String> {
    query
        .filter(|value| !value.is_empty())
        .or_else(|| Some(body).filter(|body| !body.is_empty()))
}

/// Validate a CPF taken from the query string or the request body
///
/// Registered for both GET and POST.
pub async fn validate_cpf(
    uri: Uri,
    Query(pairs): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<CpfVerdict, RequestError> {
    tracing::info!(url = %uri, "processing CPF validation request");

    let query = CpfQuery::from_pairs(pairs);
    // Invalid UTF-8 becomes U+FFFD, which normalization strips
    let body = String::from_utf8_lossy(&body).into_owned();

    let candidate = resolve_candidate(query.cpf, body).ok_or(RequestError::MissingCpf)?;
    Ok(CpfVerdict::evaluate(candidate))
}
