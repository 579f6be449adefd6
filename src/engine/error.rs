use crate::store::StoreError;

#[derive(Debug)]
pub enum EngineError {
    /// Request rejected before any store access; nothing was read or written.
    InvalidRange(&'static str),
    /// The store could not complete a fetch or insert. Propagated as-is;
    /// retrying is the caller's policy, not the engine's.
    Storage(StoreError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidRange(msg) => write!(f, "invalid range: {msg}"),
            EngineError::Storage(e) => write!(f, "storage failure: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Storage(e) => Some(e),
            EngineError::InvalidRange(_) => None,
        }
    }
}

impl From<StoreError> for EngineError {
    fn from(e: StoreError) -> Self {
        EngineError::Storage(e)
    }
}
