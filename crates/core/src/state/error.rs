use thiserror::Error;

/// Errors raised by the in-memory stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this key
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// A handler panicked while holding the store lock
    #[error("{0} store lock poisoned")]
    Poisoned(&'static str),
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
