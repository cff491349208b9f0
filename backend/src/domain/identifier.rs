//! Opaque string identifiers assigned by the document store.
//!
//! Identifiers are never parsed; the only invariant is that they are
//! non-empty and carry no surrounding whitespace.

use std::fmt;

/// Validation errors returned when constructing an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierValidationError {
    /// The identifier was empty.
    Empty {
        /// Kind of identifier being validated.
        kind: &'static str,
    },
    /// The identifier had leading or trailing whitespace.
    Padded {
        /// Kind of identifier being validated.
        kind: &'static str,
    },
}

impl fmt::Display for IdentifierValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { kind } => write!(f, "{kind} id must not be empty"),
            Self::Padded { kind } => {
                write!(f, "{kind} id must not contain surrounding whitespace")
            }
        }
    }
}

impl std::error::Error for IdentifierValidationError {}

pub(crate) fn validate_identifier(
    kind: &'static str,
    raw: &str,
) -> Result<(), IdentifierValidationError> {
    if raw.is_empty() {
        return Err(IdentifierValidationError::Empty { kind });
    }
    if raw.trim() != raw {
        return Err(IdentifierValidationError::Padded { kind });
    }
    Ok(())
}

macro_rules! define_identifier {
    (
        $(#[$outer:meta])*
        $name:ident => $kind:literal
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the identifier from borrowed input.
            pub fn new(
                id: impl AsRef<str>,
            ) -> Result<Self, $crate::domain::IdentifierValidationError> {
                Self::from_owned(id.as_ref().to_owned())
            }

            /// Generate a fresh random identifier.
            pub fn random() -> Self {
                Self(::uuid::Uuid::new_v4().simple().to_string())
            }

            fn from_owned(
                id: String,
            ) -> Result<Self, $crate::domain::IdentifierValidationError> {
                $crate::domain::identifier::validate_identifier($kind, &id)?;
                Ok(Self(id))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::domain::IdentifierValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_owned(value)
            }
        }
    };
}

pub(crate) use define_identifier;
