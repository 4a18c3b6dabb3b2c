//! Helper macro for declaring port error enums.
//!
//! Each variant carries named fields and a display template. The macro
//! derives `thiserror::Error` and emits a snake_case constructor per variant
//! whose parameters accept anything convertible into the field type.

macro_rules! define_port_error {
    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant { $($field : $ty),* });
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Unreachable { host: String } => "cannot reach {host}",
            Rejected { id: i64, reason: String } => "record {id} rejected: {reason}",
        }
    }

    #[test]
    fn constructor_converts_str_fields() {
        let err = SamplePortError::unreachable("db.internal");
        assert_eq!(err.to_string(), "cannot reach db.internal");
    }

    #[test]
    fn constructor_keeps_field_order() {
        let err = SamplePortError::rejected(7_i64, "duplicate");
        assert_eq!(
            err,
            SamplePortError::Rejected {
                id: 7,
                reason: "duplicate".to_owned(),
            }
        );
        assert_eq!(err.to_string(), "record 7 rejected: duplicate");
    }
}
