//! # Modalkit Commands
//!
//! Declarative modal-form command routing for chat platform clients.
//!
//! This crate lets an application register handler methods under command
//! names, encode those names (plus positional arguments) into the identifier
//! token of an outgoing modal form, and have the submission dispatched back
//! to the right handler with typed arguments:
//!
//! 1. A [`ModalCodec`] encodes `<prefix><command>(<separator><arg>)*` tokens
//!    and recognizes them again on submission.
//! 2. A [`ConverterRegistry`] turns submitted strings into typed values —
//!    text, booleans, numerics and live platform entities out of the box,
//!    custom types via [`ArgumentConverter`].
//! 3. A [`ServiceProvider`] injects dependencies into a fresh
//!    [`ModalModule`] instance per dispatch.
//! 4. The [`ModalCommands`] engine drives the whole pipeline and emits
//!    execution/error lifecycle events.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use modalkit_commands::*;
//!
//! struct PollModule;
//!
//! #[async_trait::async_trait]
//! impl ModalModule for PollModule {
//!     fn construct(_services: &ServiceProvider) -> Result<Self, ServiceError> {
//!         Ok(Self)
//!     }
//!
//!     fn commands(set: &mut CommandSet<Self>) {
//!         set.add("poll", Self::submit_vote);
//!     }
//! }
//!
//! impl PollModule {
//!     async fn submit_vote(self: Arc<Self>, ctx: Arc<ModalContext>, option: u32) {
//!         let _ = ctx.reply(format!("you voted {option}")).await;
//!     }
//! }
//!
//! let commands = ModalCommands::new(ModalConfig::default());
//! commands.register_modals::<PollModule>()?;
//! ```

pub mod argument;
pub mod builder;
pub mod codec;
pub mod command;
pub mod config;
pub mod context;
pub mod converter;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod module;
pub mod services;

#[cfg(test)]
pub(crate) mod testutil;

pub use argument::ModalArgument;
pub use builder::FormBuilder;
pub use codec::ModalCodec;
pub use command::{Command, CommandSet, IntoCommandResult};
pub use config::ModalConfig;
pub use context::ModalContext;
pub use converter::{ArgumentConverter, ConverterRegistry, ConverterResult};
pub use dispatch::ModalCommands;
pub use error::{BoxError, ConvertError, DispatchError, RegistrationError, ServiceError};
pub use events::{CommandErrored, CommandExecuted, ListenerHandle, Listeners};
pub use module::ModalModule;
pub use services::ServiceProvider;
