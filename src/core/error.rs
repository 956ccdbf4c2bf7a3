use thiserror::Error;

/// Broad category of a [`MathError`], for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Argument outside the mathematically valid range.
    Domain,
    /// Result does not fit the fixed-width return type.
    Overflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Domain Error: {op}: {detail}")]
    Domain { op: &'static str, detail: String },

    #[error("Overflow Error: {op}: {detail}")]
    Overflow { op: &'static str, detail: String },
}

pub type MathResult<T> = Result<T, MathError>;

impl MathError {
    pub fn domain(op: &'static str, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        crate::debug_log!("[mathzy] domain error in {op}: {detail}");
        MathError::Domain { op, detail }
    }

    pub fn overflow(op: &'static str, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        crate::debug_log!("[mathzy] overflow in {op}: {detail}");
        MathError::Overflow { op, detail }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MathError::Domain { .. } => ErrorKind::Domain,
            MathError::Overflow { .. } => ErrorKind::Overflow,
        }
    }

    /// Name of the operation that failed.
    pub fn op(&self) -> &'static str {
        match self {
            MathError::Domain { op, .. } | MathError::Overflow { op, .. } => *op,
        }
    }
}
