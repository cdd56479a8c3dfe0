//! Helper macro for generating `thiserror` enums for driven ports.
//!
//! Each variant also gets a snake-case constructor accepting `impl Into<T>`
//! for every field, so adapters can write `SpatialStoreError::query(msg)`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
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
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Constructor coverage for generated port errors.
    define_port_error! {
        pub enum ExampleStoreError {
            Connection { message: String } => "store connection failed: {message}",
            Rejected { srid: i32 } => "store rejected srid {srid}",
            Partial { message: String, inserted: u32 } => "{message} after {inserted} points",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExampleStoreError::connection("refused");
        assert_eq!(err.to_string(), "store connection failed: refused");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExampleStoreError::rejected(4001_i32);
        assert_eq!(err.to_string(), "store rejected srid 4001");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExampleStoreError::partial("aborted", 3_u32);
        assert_eq!(err.to_string(), "aborted after 3 points");
    }
}
