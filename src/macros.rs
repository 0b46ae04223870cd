//! Macro for closed, string-keyed enums.

/// Generate a closed enum whose variants round-trip through fixed keys.
///
/// The generated type serializes as its key, parses from it with `FromStr`
/// (unknown keys become `ConfigurationError::UnknownKey`), displays as it,
/// and lists its variants in `ALL`.
///
/// ```ignore
/// keyed_enum! {
///     pub enum Speed as "speed" {
///         Slow => "slow",
///         Fast => "fast",
///     }
/// }
/// ```
macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $table:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $key)]
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// The stable key this variant is known by.
            pub fn key(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key),*
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::quote::ConfigurationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($key => Ok(Self::$variant),)*
                    other => Err($crate::quote::ConfigurationError::UnknownKey {
                        table: $table,
                        key: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}
