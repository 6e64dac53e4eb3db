//! Command descriptors and module command sets.

use std::marker::PhantomData;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::context::ModalContext;
use crate::converter::ConverterRegistry;
use crate::error::DispatchError;
use crate::module::ModalModule;

pub mod handler;

pub use handler::{
    CommandHandler, ErasedCommandHandler, IntoCommandResult, InvokeOutcome, PreparedInvocation,
};

/// A registered command: a name bound to a type-erased handler.
///
/// The handler closure was captured at registration time from a typed module
/// method, so everything type-specific — parameter conversion targets, the
/// module to construct, the return type — is already baked in.
#[derive(Clone)]
pub struct Command {
    name: String,
    handler: Arc<dyn ErasedCommandHandler>,
}

impl Command {
    /// The unique name this command is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Converts the context's argument list into the handler's typed
    /// parameters, yielding an invocable continuation.
    pub(crate) fn prepare<'a>(
        &'a self,
        ctx: &'a ModalContext,
        converters: &'a ConverterRegistry,
    ) -> BoxFuture<'a, Result<Box<dyn PreparedInvocation>, DispatchError>> {
        self.handler.prepare(ctx, converters)
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command").field("name", &self.name).finish()
    }
}

/// Collects the commands a module declares in
/// [`ModalModule::commands`](crate::module::ModalModule::commands).
pub struct CommandSet<M: ModalModule> {
    commands: Vec<Command>,
    _marker: PhantomData<fn() -> M>,
}

impl<M: ModalModule> CommandSet<M> {
    pub(crate) fn new() -> Self {
        Self {
            commands: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Declares a command: a name and the module method handling it.
    ///
    /// The handler takes `(Arc<Self>, Arc<ModalContext>, ...)` with up to
    /// eight converted parameters and returns `()` or `Result<(), E>`.
    pub fn add<F, A>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: CommandHandler<M, A>,
    {
        self.commands.push(Command {
            name: name.into(),
            handler: handler.erase(),
        });
        self
    }

    /// Number of commands declared so far.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands were declared.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub(crate) fn into_commands(self) -> Vec<Command> {
        self.commands
    }
}
