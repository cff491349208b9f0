//! Defines helper macros for generating driven-port error enums.
//!
//! Each variant names the domain [`Error`](crate::domain::Error) constructor
//! it maps onto, so services can propagate port failures with `?`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:literal as $code:ident
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( {
                    $(
                        #[doc = concat!("`", stringify!($field), "` reported by the adapter.")]
                        $field : $ty
                    ),*
                } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }

        impl From<$name> for $crate::domain::Error {
            fn from(value: $name) -> Self {
                let message = value.to_string();
                match value {
                    $( $name::$variant { .. } => $crate::domain::Error::$code(message), )*
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use crate::domain::{Error, ErrorCode};

    define_port_error! {
        pub enum ExamplePortError {
            Unreachable { message: String } => "unreachable: {message}" as service_unavailable,
            Timeout { millis: u32 } => "timed out after {millis}ms" as internal,
            Rejected { message: String, count: u32 } => "rejected: {message} ({count})" as invalid_request,
            Closed => "closed" as internal,
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::unreachable("mongo");
        assert_eq!(err.to_string(), "unreachable: mongo");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExamplePortError::timeout(42_u32);
        assert_eq!(err.to_string(), "timed out after 42ms");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExamplePortError::rejected("hello", 42_u32);
        assert_eq!(err.to_string(), "rejected: hello (42)");
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(ExamplePortError::closed(), ExamplePortError::Closed);
    }

    #[test]
    fn conversion_uses_declared_error_code() {
        let unavailable = Error::from(ExamplePortError::unreachable("mongo"));
        assert_eq!(unavailable.code(), ErrorCode::ServiceUnavailable);
        assert_eq!(unavailable.message(), "unreachable: mongo");

        let invalid = Error::from(ExamplePortError::rejected("bad", 1_u32));
        assert_eq!(invalid.code(), ErrorCode::InvalidRequest);

        let closed = Error::from(ExamplePortError::closed());
        assert_eq!(closed.code(), ErrorCode::InternalError);
    }
}
