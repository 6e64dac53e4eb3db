//! Error types for the modalkit extension.

use thiserror::Error;

/// A type-erased error, as produced by handlers and custom converters.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised synchronously while registering commands or converters.
///
/// Registration happens at startup under the caller's direct control, so
/// these are returned to the registering caller instead of being funneled
/// through the error lifecycle event.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// A command with the same name already exists.
    #[error("a command named '{0}' is already registered")]
    DuplicateCommand(String),

    /// A converter for the same target type already exists.
    #[error("a converter for '{0}' is already registered")]
    DuplicateConverter(&'static str),
}

/// Errors raised by the [`ServiceProvider`](crate::services::ServiceProvider).
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// No service of the requested type was provided.
    #[error("no service of type '{0}' is registered")]
    NotFound(&'static str),
}

/// Errors raised while converting a submitted string into a typed value.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// No converter is registered for the requested target type.
    ///
    /// This is a configuration error, distinct from a value that merely
    /// failed to parse (which converters report as an absent value).
    #[error(
        "no converter registered for type '{0}'; add one with ModalCommands::register_converter"
    )]
    Unsupported(&'static str),

    /// The converter registered under this type produced a value of a
    /// different type.
    #[error("converter registered for '{0}' produced a value of a different type")]
    Mismatch(&'static str),

    /// The converter itself failed, e.g. a platform lookup errored.
    #[error("converter for '{type_name}' failed: {source}")]
    Failed {
        /// The target type being converted to.
        type_name: &'static str,
        /// The underlying converter error.
        #[source]
        source: BoxError,
    },
}

/// Errors occurring while dispatching a single modal submission.
///
/// Every variant is delivered through the error lifecycle event rather than
/// propagated into the platform's event pipeline.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The combined argument list is shorter than the handler's parameter
    /// list.
    #[error("no argument at position {index} for parameter of type '{type_name}'")]
    MissingArgument {
        /// Zero-based position into the combined argument list.
        index: usize,
        /// The parameter type that had no argument.
        type_name: &'static str,
    },

    /// A required parameter's argument did not convert to a value.
    ///
    /// `Option`-typed parameters receive `None` instead of raising this.
    #[error("argument {index} ('{value}') did not convert to '{type_name}'")]
    NoValue {
        /// Zero-based position into the combined argument list.
        index: usize,
        /// The raw submitted string.
        value: String,
        /// The parameter type the value was destined for.
        type_name: &'static str,
    },

    /// The conversion pipeline itself failed (unknown type, converter
    /// mismatch or converter error).
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// Constructing the command module failed.
    #[error("failed to construct the command module: {0}")]
    Module(#[from] ServiceError),

    /// The command handler returned an error.
    ///
    /// The original handler error is preserved as the source and can be
    /// downcast from it.
    #[error("command handler failed")]
    Handler(#[source] BoxError),
}

impl DispatchError {
    /// The original handler error, when this is a handler failure.
    pub fn handler_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Handler(source) => Some(source.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_preserves_source() {
        #[derive(Debug, Error)]
        #[error("boom")]
        struct HandlerBoom;

        let err = DispatchError::Handler(Box::new(HandlerBoom));
        let source = err.handler_error().expect("source present");
        assert!(source.downcast_ref::<HandlerBoom>().is_some());
    }

    #[test]
    fn test_convert_error_display_names_type() {
        let err = ConvertError::Unsupported("foo::Bar");
        assert!(err.to_string().contains("foo::Bar"));
    }
}
