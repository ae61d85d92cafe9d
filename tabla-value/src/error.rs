use strum::EnumMessage;
use strum_macros::{Display, EnumMessage};

use crate::key::KeyError;

/// Tabla error code
///
/// Absent results (an empty maximum, a key that was not found) are never
/// errors; they are reported as `None` by the operation that produces them.
#[derive(Debug, Clone, PartialEq, Display, EnumMessage)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Transform failed.
    ///
    /// A transform or predicate function supplied by the caller could not be
    /// applied to an element. Operations propagate this error unchanged.
    Transform,
    /// Invalid argument.
    ///
    /// An argument to a sequence or table operation is malformed, such as a
    /// negative delete count or an element that cannot be coerced to a
    /// string.
    InvalidArgument,
    /// Invalid table key.
    ///
    /// The value cannot be used as a table key. Nil, NaN and tables are
    /// never keys.
    InvalidKey,
    /// Values are not comparable.
    ///
    /// Natural ordering is only defined between two numbers or between two
    /// strings.
    Incomparable,
}

impl Error {
    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first, second)
        } else {
            ("", "")
        }
    }
}

impl std::error::Error for Error {}

impl From<KeyError> for Error {
    fn from(_e: KeyError) -> Self {
        Error::InvalidKey
    }
}

pub type Result<T> = std::result::Result<T, Error>;
