use std::fmt::Display;

use thiserror::Error;

use super::common_types::CardId;

/// Failure of a single catalog request.
///
/// Every variant carries only owned text so the error can travel inside
/// fetch results between tasks.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("failed to reach the catalog service: {0}")]
    Transport(String),

    #[error("catalog service returned status code {0}")]
    BadStatus(u16),

    #[error("failed to parse catalog response: {0}")]
    DecodeFailure(String),

    #[error("no card found with id {0}")]
    NotFound(CardId),
}

impl CatalogError {
    pub fn transport(err: impl Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn decode(err: impl Display) -> Self {
        Self::DecodeFailure(err.to_string())
    }
}
