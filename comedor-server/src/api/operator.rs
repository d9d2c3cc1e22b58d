use axum::{extract::FromRequestParts, http::request::Parts};

use shared::{AppError, ErrorCode};

/// Header carrying the operator's session identity
pub const OPERATOR_HEADER: &str = "x-operator-id";

/// Operator identity extractor
///
/// Cart endpoints are session-scoped: the terminal identifies its
/// operator with the `x-operator-id` header on every request. A missing
/// or empty header is rejected before the handler runs.
#[derive(Debug, Clone)]
pub struct Operator(pub String);

impl Operator {
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Operator
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let operator = parts
            .headers
            .get(OPERATOR_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ErrorCode::OperatorMissing)?;
        Ok(Operator(operator.to_string()))
    }
}
