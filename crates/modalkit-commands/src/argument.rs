//! Binding between handler parameter types and converter targets.
//!
//! Every converted handler parameter implements [`ModalArgument`]. The trait
//! names the converter target type and decides what an absent conversion
//! means for that parameter:
//!
//! - a plain `T` treats absence as a dispatch failure (the error lifecycle
//!   event fires and the handler never runs)
//! - an `Option<T>` absorbs absence as `None`
//!
//! The built-in converter targets are wired up below; custom converter types
//! opt in with the [`modal_argument!`](crate::modal_argument) macro:
//!
//! ```rust,ignore
//! commands.register_converter::<Color>(ColorConverter)?;
//! modalkit_commands::modal_argument!(Color);
//!
//! // handlers may now declare `color: Color` or `color: Option<Color>`
//! ```

use std::any::type_name;

use modalkit_core::{Channel, Member, Role, User};

/// A type usable as a converted command-handler parameter.
pub trait ModalArgument: Sized + Send + 'static {
    /// The type the converter registry is queried for.
    type Target: Send + 'static;

    /// The converter target's name, for diagnostics.
    fn type_name() -> &'static str {
        type_name::<Self::Target>()
    }

    /// Builds the parameter value from the conversion outcome; `None` marks
    /// a required parameter whose argument produced no value.
    fn assemble(converted: Option<Self::Target>) -> Option<Self>;
}

/// Optional parameters absorb absent conversions as `None`.
impl<T> ModalArgument for Option<T>
where
    T: ModalArgument<Target = T>,
{
    type Target = T;

    fn assemble(converted: Option<T>) -> Option<Self> {
        Some(converted)
    }
}

/// Declares types as usable converted handler parameters.
///
/// The type must have a converter registered under exactly itself; the
/// built-in targets are already declared.
#[macro_export]
macro_rules! modal_argument {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::argument::ModalArgument for $ty {
            type Target = $ty;

            fn assemble(converted: Option<$ty>) -> Option<Self> {
                converted
            }
        }
    )*};
}

modal_argument!(String, bool, i32, u32, i64, u64, f32, f64);
modal_argument!(User, Member, Role, Channel);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_argument_fails_on_absence() {
        assert_eq!(<i32 as ModalArgument>::assemble(Some(3)), Some(3));
        assert_eq!(<i32 as ModalArgument>::assemble(None), None);
    }

    #[test]
    fn test_optional_argument_absorbs_absence() {
        assert_eq!(
            <Option<i32> as ModalArgument>::assemble(Some(3)),
            Some(Some(3))
        );
        assert_eq!(<Option<i32> as ModalArgument>::assemble(None), Some(None));
    }

    #[test]
    fn test_option_shares_the_inner_target() {
        assert_eq!(
            <Option<bool> as ModalArgument>::type_name(),
            <bool as ModalArgument>::type_name()
        );
    }
}
