use std::fmt::Display;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// Which round-trip produced a bad status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Load,
    Create,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Load => write!(f, "load"),
            Action::Create => write!(f, "create"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived with a status outside 2xx.
    #[error("Failed to {action}: {status}")]
    Status { action: Action, status: u16 },

    /// The body was not JSON.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to seed: {failed} of {total} sample products were rejected")]
    Seed {
        failed: usize,
        total: usize,
        #[source]
        first: Box<ApiError>,
    },
}

impl ApiError {
    /// The HTTP status, when the backend answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Seed { first, .. } => first.status(),
            ApiError::Transport(err) => err.status().map(|status| status.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}
