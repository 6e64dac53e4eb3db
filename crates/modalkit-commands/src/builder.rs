//! Form building helper.
//!
//! Builds the modal response an application presents to users, with the
//! identifier token already encoded so the eventual submission routes back
//! to the named command.

use modalkit_core::{Response, TextInput};

use crate::codec::ModalCodec;
use crate::converter::ConverterRegistry;
use crate::error::ConvertError;

/// Builder for a modal form response.
///
/// Obtained from [`ModalCommands::form`](crate::dispatch::ModalCommands::form)
/// so the extension's prefix, separator and converters apply.
///
/// # Example
///
/// ```rust,ignore
/// let response = commands
///     .form("feedback")
///     .typed_arg(&poll_id)?
///     .title("Send feedback")
///     .input(TextInput::new("rating", "Rating (1-5)"))
///     .input(TextInput::new("text", "Your feedback"))
///     .build();
/// ctx.respond(response).await?;
/// ```
pub struct FormBuilder<'a> {
    codec: &'a ModalCodec,
    converters: &'a ConverterRegistry,
    name: String,
    args: Vec<String>,
    title: Option<String>,
    inputs: Vec<TextInput>,
}

impl std::fmt::Debug for FormBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormBuilder")
            .field("codec", &self.codec)
            .field("name", &self.name)
            .field("args", &self.args)
            .field("title", &self.title)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}

impl<'a> FormBuilder<'a> {
    pub(crate) fn new(
        codec: &'a ModalCodec,
        converters: &'a ConverterRegistry,
        name: impl Into<String>,
    ) -> Self {
        Self {
            codec,
            converters,
            name: name.into(),
            args: Vec::new(),
            title: None,
            inputs: Vec::new(),
        }
    }

    /// Appends a positional argument verbatim.
    ///
    /// The value must not contain the configured separator; the codec
    /// performs no escaping.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Appends a positional argument rendered through its registered
    /// converter, so the handler's typed parameter round-trips.
    pub fn typed_arg<T>(mut self, value: &T) -> Result<Self, ConvertError>
    where
        T: Send + 'static,
    {
        self.args.push(self.converters.to_submitted(value)?);
        Ok(self)
    }

    /// Sets the form title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a text input row. Submitted values arrive in attachment
    /// order, after the encoded positional arguments.
    pub fn input(mut self, input: TextInput) -> Self {
        self.inputs.push(input);
        self
    }

    /// The identifier token this form will carry.
    pub fn custom_id(&self) -> String {
        self.codec.encode(&self.name, &self.args)
    }

    /// Builds the modal response.
    pub fn build(self) -> Response {
        let mut response = Response::modal();
        response.custom_id = Some(self.codec.encode(&self.name, &self.args));
        response.title = self.title;
        response.inputs = self.inputs;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modalkit_core::ResponseKind;

    fn fixtures() -> (ModalCodec, ConverterRegistry) {
        (ModalCodec::new("MC:", ':'), ConverterRegistry::with_defaults())
    }

    #[test]
    fn test_build_encodes_custom_id() {
        let (codec, converters) = fixtures();
        let response = FormBuilder::new(&codec, &converters, "poll")
            .arg("2")
            .title("Vote")
            .input(TextInput::new("choice", "Your choice"))
            .build();

        assert_eq!(response.kind, ResponseKind::Modal);
        assert_eq!(response.custom_id.as_deref(), Some("MC:poll:2"));
        assert_eq!(response.title.as_deref(), Some("Vote"));
        assert_eq!(response.inputs.len(), 1);
    }

    #[test]
    fn test_no_args_yields_bare_token() {
        let (codec, converters) = fixtures();
        let response = FormBuilder::new(&codec, &converters, "feedback").build();
        assert_eq!(response.custom_id.as_deref(), Some("MC:feedback"));
    }

    #[test]
    fn test_typed_arg_uses_converter() {
        let (codec, converters) = fixtures();
        let builder = FormBuilder::new(&codec, &converters, "poll")
            .typed_arg(&42i64)
            .unwrap()
            .typed_arg(&true)
            .unwrap();
        assert_eq!(builder.custom_id(), "MC:poll:42:true");
    }

    #[test]
    fn test_typed_arg_unknown_type_fails() {
        let (codec, converters) = fixtures();
        let err = FormBuilder::new(&codec, &converters, "poll")
            .typed_arg(&8u8)
            .unwrap_err();
        assert!(matches!(err, ConvertError::Unsupported(_)));
    }
}
