use storefront_core::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// `true` when the remote service could not be reached at all.
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}
