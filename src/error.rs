use std::fmt;

use crate::numerics::distribution::Parameter;

/// An input field of the panel, used to point the user at the offending entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    XBound,
    Param(Parameter),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XBound => f.write_str("x"),
            Self::Param(parameter) => f.write_str(parameter.name()),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A selection index past the end of the catalog. Always a wiring bug.
    #[error("distribution index {index} out of range for catalog of {len}")]
    OutOfRange { index: usize, len: usize },

    /// User-entered text that does not parse as the value the field requires.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidInput { field: Field, reason: String },

    #[error("could not evaluate distribution: {0}")]
    EvaluationFault(#[from] EvaluationFault),
}

/// A domain error raised while evaluating a distribution over its range.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EvaluationFault {
    #[error("missing parameter `{}`", .0.name())]
    MissingParameter(Parameter),

    #[error("{x} is outside the support of the distribution")]
    InvalidArgument { x: f64 },

    #[error("evaluator returned {got} values for {expected} inputs")]
    LengthMismatch { expected: usize, got: usize },
}

impl Error {
    pub(crate) fn invalid_input(field: Field, reason: impl fmt::Display) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.to_string(),
        }
    }
}
