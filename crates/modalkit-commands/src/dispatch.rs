//! The submission dispatch engine.
//!
//! [`ModalCommands`] is the extension's root object: it owns the codec, the
//! command map, the converter registry, the service provider and the
//! lifecycle event lists. The embedding application constructs one instance,
//! registers modules and converters at startup, and feeds every incoming
//! modal submission to [`handle_submission`](ModalCommands::handle_submission).
//!
//! A dispatch walks through: decode → resolve → build context → convert
//! arguments → acknowledge → construct module → pre-hook → invoke →
//! post-hook → executed event. Tokens without our prefix and unknown command
//! names are rejected silently so other subscribers of the same platform
//! event can claim the submission. Everything after resolution reports
//! failures through the error lifecycle event only — a misbehaving handler
//! never unwinds into the platform's event loop.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{Instrument, Level, debug, span, trace};

use modalkit_core::{BoxedClient, ModalSubmit};

use crate::builder::FormBuilder;
use crate::codec::ModalCodec;
use crate::command::{Command, CommandSet, InvokeOutcome};
use crate::config::ModalConfig;
use crate::context::ModalContext;
use crate::converter::{ArgumentConverter, ConverterRegistry};
use crate::error::{DispatchError, RegistrationError};
use crate::events::{CommandErrored, CommandExecuted, ListenerHandle, Listeners};
use crate::module::ModalModule;
use crate::services::ServiceProvider;

/// The modal command extension.
///
/// # Example
///
/// ```rust,ignore
/// let commands = ModalCommands::new(
///     ModalConfig::default().prefix("app:").services(services),
/// );
/// commands.register_modals::<FeedbackModule>()?;
///
/// // platform glue:
/// client.on_modal_submit(|client, submit| async move {
///     commands.handle_submission(client, &submit).await;
/// });
/// ```
pub struct ModalCommands {
    codec: ModalCodec,
    services: Arc<ServiceProvider>,
    commands: RwLock<HashMap<String, Command>>,
    converters: ConverterRegistry,
    executed: Listeners<CommandExecuted>,
    errored: Listeners<CommandErrored>,
}

impl ModalCommands {
    /// Creates an extension instance from its configuration, with the
    /// built-in converters registered.
    pub fn new(config: ModalConfig) -> Self {
        Self {
            codec: ModalCodec::new(config.prefix, config.separator),
            services: config.services,
            commands: RwLock::new(HashMap::new()),
            converters: ConverterRegistry::with_defaults(),
            executed: Listeners::new(),
            errored: Listeners::new(),
        }
    }

    /// The codec building and parsing this extension's identifier tokens.
    pub fn codec(&self) -> &ModalCodec {
        &self.codec
    }

    /// The converter registry consulted during argument conversion.
    pub fn converters(&self) -> &ConverterRegistry {
        &self.converters
    }

    // ─── Registration ─────────────────────────────────────────────────────
    //
    // All registration happens at startup, before submissions flow. The maps
    // are read-mostly afterwards; registering mid-dispatch is not supported.

    /// Registers every command declared by module `M`.
    ///
    /// Fails on the first name collision; commands inserted before the
    /// collision stay registered.
    pub fn register_modals<M: ModalModule>(&self) -> Result<(), RegistrationError> {
        let mut set = CommandSet::new();
        M::commands(&mut set);

        let mut commands = self.commands.write();
        for command in set.into_commands() {
            match commands.entry(command.name().to_string()) {
                Entry::Occupied(entry) => {
                    return Err(RegistrationError::DuplicateCommand(entry.key().clone()));
                }
                Entry::Vacant(slot) => {
                    debug!(command = %command.name(), "registered modal command");
                    slot.insert(command);
                }
            }
        }
        Ok(())
    }

    /// Registers a converter for parameter type `T`.
    pub fn register_converter<T>(
        &self,
        converter: impl ArgumentConverter<T> + 'static,
    ) -> Result<(), RegistrationError>
    where
        T: Send + 'static,
    {
        self.converters.register(converter)
    }

    /// Removes the converter for `T`, returning whether one was present.
    pub fn unregister_converter<T: 'static>(&self) -> bool {
        self.converters.unregister::<T>()
    }

    /// Names of all registered commands, in no particular order.
    pub fn command_names(&self) -> Vec<String> {
        self.commands.read().keys().cloned().collect()
    }

    /// Starts building a modal form whose submission dispatches `name`.
    pub fn form(&self, name: impl Into<String>) -> FormBuilder<'_> {
        FormBuilder::new(&self.codec, &self.converters, name)
    }

    // ─── Lifecycle events ─────────────────────────────────────────────────

    /// Subscribes to successful command executions.
    pub fn on_executed<F, Fut>(&self, f: F) -> ListenerHandle
    where
        F: Fn(CommandExecuted) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.executed.subscribe(f)
    }

    /// Removes an executed-event subscription.
    pub fn remove_executed(&self, handle: ListenerHandle) -> bool {
        self.executed.unsubscribe(handle)
    }

    /// Subscribes to failed dispatches.
    pub fn on_errored<F, Fut>(&self, f: F) -> ListenerHandle
    where
        F: Fn(CommandErrored) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.errored.subscribe(f)
    }

    /// Removes an errored-event subscription.
    pub fn remove_errored(&self, handle: ListenerHandle) -> bool {
        self.errored.unsubscribe(handle)
    }

    // ─── Dispatch ─────────────────────────────────────────────────────────

    /// Dispatches one modal submission.
    ///
    /// Submissions whose token lacks this extension's prefix, or whose
    /// command name is unknown, are ignored without acknowledging the
    /// submission or emitting an event. All later failures surface through
    /// the error lifecycle event.
    pub async fn handle_submission(&self, client: BoxedClient, submit: &ModalSubmit) {
        let span = span!(Level::DEBUG, "dispatch", custom_id = %submit.custom_id);
        self.dispatch_submission(client, submit).instrument(span).await
    }

    async fn dispatch_submission(&self, client: BoxedClient, submit: &ModalSubmit) {
        let Some((name, positional)) = self.codec.decode(&submit.custom_id) else {
            trace!(custom_id = %submit.custom_id, "submission token carries a foreign prefix, ignoring");
            return;
        };

        let command = {
            let commands = self.commands.read();
            commands.get(&name).cloned()
        };
        let Some(command) = command else {
            debug!(command = %name, "no command registered for submission, ignoring");
            return;
        };

        // The token with the prefix stripped, as carried by both events.
        let modal_id = self.codec.strip(&submit.custom_id).unwrap_or_default();

        // Encoded positional arguments first, submitted field values after.
        let mut values = positional;
        values.extend(submit.values.iter().cloned());

        let ctx = Arc::new(ModalContext::new(client, &submit.interaction, values));

        let prepared = match command.prepare(&ctx, &self.converters).await {
            Ok(prepared) => prepared,
            Err(err) => {
                // Not acknowledged: the platform's timeout/fallback applies.
                self.emit_errored(modal_id, command.name(), &ctx, err).await;
                return;
            }
        };

        submit.mark_handled();

        match prepared
            .invoke(Arc::clone(&self.services), Arc::clone(&ctx))
            .await
        {
            Ok(InvokeOutcome::Invoked) => {
                debug!(command = %command.name(), "modal command executed");
                if !self.executed.is_empty() {
                    self.executed
                        .emit(CommandExecuted {
                            modal_id: modal_id.to_string(),
                            command: command.name().to_string(),
                            ctx: Arc::clone(&ctx),
                            handled: true,
                        })
                        .await;
                }
            }
            Ok(InvokeOutcome::Skipped) => {
                debug!(command = %command.name(), "pre-execution hook declined, dispatch stopped");
            }
            Err(err) => {
                self.emit_errored(modal_id, command.name(), &ctx, err).await;
            }
        }
    }

    async fn emit_errored(
        &self,
        modal_id: &str,
        command: &str,
        ctx: &Arc<ModalContext>,
        error: DispatchError,
    ) {
        debug!(command = %command, %error, "modal command dispatch failed");
        if self.errored.is_empty() {
            return;
        }
        self.errored
            .emit(CommandErrored {
                modal_id: modal_id.to_string(),
                command: command.to_string(),
                ctx: Arc::clone(ctx),
                error: Arc::new(error),
                handled: false,
            })
            .await;
    }
}

impl std::fmt::Debug for ModalCommands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalCommands")
            .field("prefix", &self.codec.prefix())
            .field("commands", &self.commands.read().len())
            .finish_non_exhaustive()
    }
}

/// Registers several module types in one statement.
///
/// ```rust,ignore
/// register_modals!(commands, FeedbackModule, PollModule)?;
/// ```
#[macro_export]
macro_rules! register_modals {
    ($commands:expr, $($module:ty),+ $(,)?) => {{
        let run = || -> Result<(), $crate::RegistrationError> {
            $($commands.register_modals::<$module>()?;)+
            Ok(())
        };
        run()
    }};
}
