//! Argument conversion between submitted strings and typed values.
//!
//! Modal fields and encoded positional arguments arrive as plain strings; a
//! [`ConverterRegistry`] turns them into the types a handler declares. Each
//! target type has at most one [`ArgumentConverter`] registered; the built-in
//! set covers text, booleans, the common integer and float widths, and the
//! platform entity references (resolved against the live client).
//!
//! Conversion distinguishes three outcomes:
//!
//! - `Ok(Some(value))` — the string parsed/resolved to a value
//! - `Ok(None)` — absent: the string did not parse, or the referenced entity
//!   does not exist; how that is treated depends on the parameter type (see
//!   [`ModalArgument`](crate::argument::ModalArgument))
//! - `Err(..)` — the converter itself failed, e.g. a platform call errored
//!
//! Asking for a type with no registered converter is a configuration error
//! ([`ConvertError::Unsupported`]), never "absent".

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use parking_lot::RwLock;

use modalkit_core::{Channel, Member, Role, User};

use crate::context::ModalContext;
use crate::error::{BoxError, ConvertError, RegistrationError};

pub mod entity;
pub mod general;

pub use entity::{ChannelConverter, MemberConverter, RoleConverter, UserConverter};
pub use general::{
    BoolConverter, DoubleConverter, FloatConverter, IntConverter, LongConverter, StringConverter,
    UintConverter, UlongConverter,
};

/// Outcome of a string → value conversion: `Ok(None)` means "no value", not
/// an error.
pub type ConverterResult<T> = Result<Option<T>, BoxError>;

/// A bidirectional string ⇄ value converter for one target type.
///
/// # Example
///
/// ```rust,ignore
/// struct ColorConverter;
///
/// #[async_trait]
/// impl ArgumentConverter<Color> for ColorConverter {
///     async fn from_submitted(&self, value: &str, _ctx: &ModalContext) -> ConverterResult<Color> {
///         Ok(Color::parse(value))
///     }
///
///     fn to_submitted(&self, value: &Color) -> String {
///         value.hex()
///     }
/// }
///
/// commands.register_converter::<Color>(ColorConverter)?;
/// ```
#[async_trait]
pub trait ArgumentConverter<T>: Send + Sync {
    /// Converts a submitted string into a value, resolving against the
    /// dispatch context where needed.
    async fn from_submitted(&self, value: &str, ctx: &ModalContext) -> ConverterResult<T>;

    /// Renders a valid value back into its submitted-string form, suitable
    /// for embedding in an identifier token.
    fn to_submitted(&self, value: &T) -> String;
}

// ─── Type erasure ─────────────────────────────────────────────────────────
//
// The registry stores converters behind a TypeId-keyed interface table so a
// single map serves every target type. Typed registration keeps the pairing
// compile-checked; the boxed-Any seam only exists inside this module.

trait ErasedConverter: Send + Sync {
    fn convert_from<'a>(
        &'a self,
        value: &'a str,
        ctx: &'a ModalContext,
    ) -> BoxFuture<'a, Result<Option<Box<dyn Any + Send>>, BoxError>>;

    /// `None` when the value is not of this converter's target type.
    fn convert_to(&self, value: &(dyn Any + Send)) -> Option<String>;
}

struct Typed<T, C> {
    converter: C,
    _marker: PhantomData<fn() -> T>,
}

impl<T, C> ErasedConverter for Typed<T, C>
where
    T: Send + 'static,
    C: ArgumentConverter<T>,
{
    fn convert_from<'a>(
        &'a self,
        value: &'a str,
        ctx: &'a ModalContext,
    ) -> BoxFuture<'a, Result<Option<Box<dyn Any + Send>>, BoxError>> {
        Box::pin(async move {
            let converted = self.converter.from_submitted(value, ctx).await?;
            Ok(converted.map(|v| Box::new(v) as Box<dyn Any + Send>))
        })
    }

    fn convert_to(&self, value: &(dyn Any + Send)) -> Option<String> {
        value
            .downcast_ref::<T>()
            .map(|v| self.converter.to_submitted(v))
    }
}

fn erase<T, C>(converter: C) -> Arc<dyn ErasedConverter>
where
    T: Send + 'static,
    C: ArgumentConverter<T> + 'static,
{
    Arc::new(Typed::<T, C> {
        converter,
        _marker: PhantomData,
    })
}

// ─── Registry ─────────────────────────────────────────────────────────────

/// The per-extension table of argument converters, keyed by target type.
///
/// Populated at startup; read concurrently by every dispatch afterwards.
/// Registering converters after dispatching has begun is not supported
/// safely.
#[derive(Default)]
pub struct ConverterRegistry {
    entries: RwLock<HashMap<TypeId, Arc<dyn ErasedConverter>>>,
}

impl ConverterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in converters registered.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        {
            let mut entries = registry.entries.write();
            entries.insert(TypeId::of::<String>(), erase::<String, _>(StringConverter));
            entries.insert(TypeId::of::<bool>(), erase::<bool, _>(BoolConverter));
            entries.insert(TypeId::of::<i32>(), erase::<i32, _>(IntConverter));
            entries.insert(TypeId::of::<u32>(), erase::<u32, _>(UintConverter));
            entries.insert(TypeId::of::<i64>(), erase::<i64, _>(LongConverter));
            entries.insert(TypeId::of::<u64>(), erase::<u64, _>(UlongConverter));
            entries.insert(TypeId::of::<f32>(), erase::<f32, _>(FloatConverter));
            entries.insert(TypeId::of::<f64>(), erase::<f64, _>(DoubleConverter));
            entries.insert(TypeId::of::<User>(), erase::<User, _>(UserConverter));
            entries.insert(TypeId::of::<Member>(), erase::<Member, _>(MemberConverter));
            entries.insert(TypeId::of::<Role>(), erase::<Role, _>(RoleConverter));
            entries.insert(TypeId::of::<Channel>(), erase::<Channel, _>(ChannelConverter));
        }
        registry
    }

    /// Registers a converter for `T`.
    ///
    /// Fails when a converter for `T` (including a built-in one) already
    /// exists; unregister it first to replace it.
    pub fn register<T>(
        &self,
        converter: impl ArgumentConverter<T> + 'static,
    ) -> Result<(), RegistrationError>
    where
        T: Send + 'static,
    {
        let mut entries = self.entries.write();
        match entries.entry(TypeId::of::<T>()) {
            Entry::Occupied(_) => Err(RegistrationError::DuplicateConverter(type_name::<T>())),
            Entry::Vacant(slot) => {
                slot.insert(erase::<T, _>(converter));
                Ok(())
            }
        }
    }

    /// Removes the converter for `T`, returning whether one was present.
    pub fn unregister<T: 'static>(&self) -> bool {
        self.entries.write().remove(&TypeId::of::<T>()).is_some()
    }

    /// Whether a converter for `T` is registered.
    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.read().contains_key(&TypeId::of::<T>())
    }

    /// Converts a submitted string into a `T` via the registered converter.
    pub async fn convert<T>(&self, raw: &str, ctx: &ModalContext) -> Result<Option<T>, ConvertError>
    where
        T: Send + 'static,
    {
        let converter = {
            let entries = self.entries.read();
            entries.get(&TypeId::of::<T>()).cloned()
        };
        let converter = converter.ok_or(ConvertError::Unsupported(type_name::<T>()))?;

        let converted = converter
            .convert_from(raw, ctx)
            .await
            .map_err(|source| ConvertError::Failed {
                type_name: type_name::<T>(),
                source,
            })?;

        match converted {
            None => Ok(None),
            Some(value) => value
                .downcast::<T>()
                .map(|v| Some(*v))
                .map_err(|_| ConvertError::Mismatch(type_name::<T>())),
        }
    }

    /// Renders a value back into its submitted-string form.
    pub fn to_submitted<T>(&self, value: &T) -> Result<String, ConvertError>
    where
        T: Send + 'static,
    {
        let converter = {
            let entries = self.entries.read();
            entries.get(&TypeId::of::<T>()).cloned()
        };
        let converter = converter.ok_or(ConvertError::Unsupported(type_name::<T>()))?;
        converter
            .convert_to(value)
            .ok_or(ConvertError::Mismatch(type_name::<T>()))
    }
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("converters", &self.entries.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{direct_context, mock_client};

    #[test]
    fn test_defaults_cover_builtin_types() {
        let registry = ConverterRegistry::with_defaults();
        assert!(registry.contains::<String>());
        assert!(registry.contains::<bool>());
        assert!(registry.contains::<i32>());
        assert!(registry.contains::<u64>());
        assert!(registry.contains::<f64>());
        assert!(registry.contains::<User>());
        assert!(registry.contains::<Role>());
        assert!(!registry.contains::<u8>());
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let registry = ConverterRegistry::with_defaults();
        let err = registry.register::<bool>(BoolConverter).unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateConverter(_)));
    }

    #[test]
    fn test_unregister_then_register_succeeds() {
        let registry = ConverterRegistry::with_defaults();
        assert!(registry.unregister::<bool>());
        assert!(registry.register::<bool>(BoolConverter).is_ok());
    }

    #[test]
    fn test_unregister_absent_returns_false() {
        let registry = ConverterRegistry::new();
        assert!(!registry.unregister::<bool>());
    }

    #[tokio::test]
    async fn test_convert_unknown_type_is_configuration_error() {
        let registry = ConverterRegistry::new();
        let ctx = direct_context(mock_client(), vec![]);
        let err = registry.convert::<bool>("true", &ctx).await.unwrap_err();
        assert!(matches!(err, ConvertError::Unsupported(_)));
    }

    #[tokio::test]
    async fn test_convert_typed_round_trip() {
        let registry = ConverterRegistry::with_defaults();
        let ctx = direct_context(mock_client(), vec![]);
        let value = registry.convert::<i64>("-7", &ctx).await.unwrap();
        assert_eq!(value, Some(-7));
        assert_eq!(registry.to_submitted(&-7i64).unwrap(), "-7");
    }
}
