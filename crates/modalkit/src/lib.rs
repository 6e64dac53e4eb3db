//! # Modalkit
//!
//! Declarative modal-form command routing for chat platform clients.
//!
//! ## Overview
//!
//! Modalkit extends a chat platform client with command-style routing for
//! modal form submissions. A command name (plus optional positional
//! arguments) is encoded into the form's identifier token; when the form
//! comes back, the extension decodes the token, resolves the handler,
//! converts the submitted strings into typed parameters and invokes the
//! handler on a freshly constructed, dependency-injected module instance.
//!
//! ```text
//! ┌──────────┐  submission  ┌───────────┐  decode  ┌──────────┐  convert  ┌─────────┐
//! │ Platform │─────────────▶│ ModalCodec │─────────▶│ Command  │──────────▶│ Module  │
//! │  client  │              │  (token)   │  lookup  │ registry │  + spawn  │ handler │
//! └──────────┘              └───────────┘          └──────────┘           └─────────┘
//! ```
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use modalkit::prelude::*;
//!
//! struct FeedbackModule;
//!
//! #[async_trait::async_trait]
//! impl ModalModule for FeedbackModule {
//!     fn construct(_services: &ServiceProvider) -> Result<Self, ServiceError> {
//!         Ok(Self)
//!     }
//!
//!     fn commands(set: &mut CommandSet<Self>) {
//!         set.add("feedback", Self::feedback);
//!     }
//! }
//!
//! impl FeedbackModule {
//!     async fn feedback(self: Arc<Self>, ctx: Arc<ModalContext>, rating: u32, text: String) {
//!         let _ = ctx.reply(format!("thanks for the {rating}/5: {text}")).await;
//!     }
//! }
//!
//! let commands = ModalCommands::new(ModalConfig::default().prefix("app:"));
//! commands.register_modals::<FeedbackModule>()?;
//!
//! // platform glue: feed every incoming modal submission to the extension
//! commands.handle_submission(client, &submit).await;
//! ```

pub use modalkit_commands as commands;
pub use modalkit_core as core;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use modalkit::prelude::*;
/// ```
pub mod prelude {
    // Engine and configuration - main entry points
    pub use modalkit_commands::{ModalCommands, ModalConfig};

    // Module system - declaring commands and their dependencies
    pub use modalkit_commands::{CommandSet, ModalModule, ServiceProvider};

    // Dispatch surface - contexts, arguments, converters, events
    pub use modalkit_commands::{
        ArgumentConverter, CommandErrored, CommandExecuted, ConverterResult, FormBuilder,
        ListenerHandle, ModalArgument, ModalContext,
    };

    // Error types
    pub use modalkit_commands::{
        BoxError, ConvertError, DispatchError, RegistrationError, ServiceError,
    };

    // Registration macros
    pub use modalkit_commands::{modal_argument, register_modals};

    // Platform boundary types
    pub use modalkit_core::{
        ApiError, ApiResult, BoxedClient, ChatClient, Interaction, ModalSubmit, Response,
        TextInput,
    };
}
