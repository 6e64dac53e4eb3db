//! Built-in converters for text, boolean and numeric types.

use async_trait::async_trait;

use crate::context::ModalContext;

use super::{ArgumentConverter, ConverterResult};

/// Passes the submitted string through unchanged.
pub struct StringConverter;

#[async_trait]
impl ArgumentConverter<String> for StringConverter {
    async fn from_submitted(&self, value: &str, _ctx: &ModalContext) -> ConverterResult<String> {
        Ok(Some(value.to_string()))
    }

    fn to_submitted(&self, value: &String) -> String {
        value.clone()
    }
}

/// Accepts a fixed, case-sensitive set of boolean literals.
///
/// `"true"`, `"t"`, `"yes"`, `"y"` and `"1"` convert to `true`; `"false"`,
/// `"f"`, `"no"`, `"n"` and `"0"` convert to `false`. Anything else —
/// including different casing such as `"YES"` — is absent.
pub struct BoolConverter;

#[async_trait]
impl ArgumentConverter<bool> for BoolConverter {
    async fn from_submitted(&self, value: &str, _ctx: &ModalContext) -> ConverterResult<bool> {
        Ok(match value {
            "true" | "t" | "yes" | "y" | "1" => Some(true),
            "false" | "f" | "no" | "n" | "0" => Some(false),
            _ => None,
        })
    }

    fn to_submitted(&self, value: &bool) -> String {
        value.to_string()
    }
}

macro_rules! numeric_converter {
    ($(#[$meta:meta])* $name:ident => $ty:ty) => {
        $(#[$meta])*
        pub struct $name;

        #[async_trait]
        impl ArgumentConverter<$ty> for $name {
            async fn from_submitted(
                &self,
                value: &str,
                _ctx: &ModalContext,
            ) -> ConverterResult<$ty> {
                Ok(value.parse::<$ty>().ok())
            }

            fn to_submitted(&self, value: &$ty) -> String {
                value.to_string()
            }
        }
    };
}

numeric_converter! {
    /// Parses a 32-bit signed integer; absent on parse failure.
    IntConverter => i32
}

numeric_converter! {
    /// Parses a 32-bit unsigned integer; absent on parse failure.
    UintConverter => u32
}

numeric_converter! {
    /// Parses a 64-bit signed integer; absent on parse failure.
    LongConverter => i64
}

numeric_converter! {
    /// Parses a 64-bit unsigned integer; absent on parse failure.
    UlongConverter => u64
}

numeric_converter! {
    /// Parses a single-precision float; absent on parse failure.
    FloatConverter => f32
}

numeric_converter! {
    /// Parses a double-precision float; absent on parse failure.
    DoubleConverter => f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{direct_context, mock_client};
    use crate::ModalContext;

    fn ctx() -> ModalContext {
        direct_context(mock_client(), vec![])
    }

    #[tokio::test]
    async fn test_string_passthrough() {
        let ctx = ctx();
        let value = StringConverter
            .from_submitted("as submitted", &ctx)
            .await
            .unwrap();
        assert_eq!(value.as_deref(), Some("as submitted"));
    }

    #[tokio::test]
    async fn test_bool_true_literals() {
        let ctx = ctx();
        for literal in ["true", "t", "yes", "y", "1"] {
            let value = BoolConverter.from_submitted(literal, &ctx).await.unwrap();
            assert_eq!(value, Some(true), "literal {literal:?}");
        }
    }

    #[tokio::test]
    async fn test_bool_false_literals() {
        let ctx = ctx();
        for literal in ["false", "f", "no", "n", "0"] {
            let value = BoolConverter.from_submitted(literal, &ctx).await.unwrap();
            assert_eq!(value, Some(false), "literal {literal:?}");
        }
    }

    #[tokio::test]
    async fn test_bool_literals_are_case_sensitive() {
        let ctx = ctx();
        for literal in ["YES", "True", "T", "No", "FALSE"] {
            let value = BoolConverter.from_submitted(literal, &ctx).await.unwrap();
            assert_eq!(value, None, "literal {literal:?}");
        }
    }

    #[tokio::test]
    async fn test_numeric_parse_and_absent() {
        let ctx = ctx();
        assert_eq!(
            IntConverter.from_submitted("-42", &ctx).await.unwrap(),
            Some(-42)
        );
        assert_eq!(IntConverter.from_submitted("x", &ctx).await.unwrap(), None);
        assert_eq!(
            UintConverter.from_submitted("-1", &ctx).await.unwrap(),
            None
        );
        assert_eq!(
            UlongConverter
                .from_submitted("18446744073709551615", &ctx)
                .await
                .unwrap(),
            Some(u64::MAX)
        );
        assert_eq!(
            DoubleConverter.from_submitted("2.5", &ctx).await.unwrap(),
            Some(2.5)
        );
    }

    #[test]
    fn test_to_submitted_renders_plainly() {
        assert_eq!(BoolConverter.to_submitted(&true), "true");
        assert_eq!(LongConverter.to_submitted(&-9), "-9");
        assert_eq!(StringConverter.to_submitted(&"x".to_string()), "x");
    }
}
