use std::fmt;

/// Errors surfaced by the kernel.
///
/// Rewrite rules and differentiation never produce errors: they either
/// transform a node or hand it back unchanged. Only the literal-parsing
/// boundary and checked numeric comparisons report failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbError {
    /// Text that is not a valid integer or decimal numeral
    InvalidNumber {
        /// The rejected text
        value: String,
    },

    /// Text that is neither `true` nor `false`
    InvalidBoolean {
        /// The rejected text
        token: String,
    },

    /// An operation was asked for outside of its domain
    /// (e.g. ordering two complex numbers)
    DomainMismatch(String),

    /// The engine reached a state that should be impossible
    InternalInvariant(String),
}

impl SymbError {
    /// Create `InvalidNumber`
    pub fn invalid_number(value: impl Into<String>) -> Self {
        SymbError::InvalidNumber {
            value: value.into(),
        }
    }

    /// Create `InvalidBoolean`
    pub fn invalid_boolean(token: impl Into<String>) -> Self {
        SymbError::InvalidBoolean {
            token: token.into(),
        }
    }

    /// Create `DomainMismatch`
    pub fn domain(msg: impl Into<String>) -> Self {
        SymbError::DomainMismatch(msg.into())
    }

    /// Create `InternalInvariant`
    pub fn invariant(msg: impl Into<String>) -> Self {
        SymbError::InternalInvariant(msg.into())
    }
}

impl fmt::Display for SymbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbError::InvalidNumber { value } => {
                write!(f, "Invalid number format: '{}'", value)
            }
            SymbError::InvalidBoolean { token } => {
                write!(f, "Token '{}' is not valid for boolean", token)
            }
            SymbError::DomainMismatch(msg) => write!(f, "Domain mismatch: {}", msg),
            SymbError::InternalInvariant(msg) => {
                write!(f, "Internal invariant broken (engine bug): {}", msg)
            }
        }
    }
}

impl std::error::Error for SymbError {}
