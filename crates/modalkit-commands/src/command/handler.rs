//! Typed handler functions and their erasure.
//!
//! [`CommandHandler`] is implemented, via the arity macro below, for async
//! functions of shape `(Arc<M>, Arc<ModalContext>, A1..An)` where every `Ai`
//! is a [`ModalArgument`] and the return type is `()` or `Result<(), E>`.
//! Registration erases the function behind [`ErasedCommandHandler`] so
//! commands of different modules live in one map.
//!
//! Dispatch is split in two phases so the platform acknowledgment can sit
//! between them: [`ErasedCommandHandler::prepare`] converts the argument
//! list (sequentially, one parameter completing before the next begins) into
//! a [`PreparedInvocation`], which then constructs the module, runs the
//! lifecycle hooks and invokes the handler.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::argument::ModalArgument;
use crate::context::ModalContext;
use crate::converter::ConverterRegistry;
use crate::error::{BoxError, DispatchError};
use crate::module::{ModalModule, build_module};
use crate::services::ServiceProvider;

/// Return types accepted from command handlers.
pub trait IntoCommandResult: Send {
    /// Normalizes the handler's return value into a result; the error side
    /// feeds the error lifecycle event.
    fn into_command_result(self) -> Result<(), BoxError>;
}

impl IntoCommandResult for () {
    fn into_command_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E: Into<BoxError> + Send> IntoCommandResult for Result<(), E> {
    fn into_command_result(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}

/// How a prepared invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeOutcome {
    /// The handler ran to completion and the post-execution hook was run.
    Invoked,
    /// The pre-execution hook declined; nothing was invoked.
    Skipped,
}

/// A command with its arguments already converted, ready to run.
pub trait PreparedInvocation: Send {
    /// Constructs the module, runs the hooks and invokes the handler.
    fn invoke(
        self: Box<Self>,
        services: Arc<ServiceProvider>,
        ctx: Arc<ModalContext>,
    ) -> BoxFuture<'static, Result<InvokeOutcome, DispatchError>>;
}

/// Object-safe face of a registered handler.
pub trait ErasedCommandHandler: Send + Sync {
    /// Converts the context's argument list into the handler's parameters.
    fn prepare<'a>(
        &'a self,
        ctx: &'a ModalContext,
        converters: &'a ConverterRegistry,
    ) -> BoxFuture<'a, Result<Box<dyn PreparedInvocation>, DispatchError>>;
}

/// Functions registrable as command handlers for module `M`.
///
/// `A` is the tuple of converted parameter types; it only serves to keep the
/// blanket impls apart.
pub trait CommandHandler<M: ModalModule, A>: Send + Sync + Sized + 'static {
    /// Erases the typed function for storage in the command map.
    fn erase(self) -> Arc<dyn ErasedCommandHandler>;
}

/// Converts one positional argument. The raw string at `index` is looked up
/// in the combined argument list carried by the context.
async fn convert_argument<A: ModalArgument>(
    ctx: &ModalContext,
    index: usize,
    converters: &ConverterRegistry,
) -> Result<A, DispatchError> {
    let raw = ctx
        .values()
        .get(index)
        .ok_or(DispatchError::MissingArgument {
            index,
            type_name: A::type_name(),
        })?;
    let converted = converters.convert::<A::Target>(raw, ctx).await?;
    A::assemble(converted).ok_or_else(|| DispatchError::NoValue {
        index,
        value: raw.clone(),
        type_name: A::type_name(),
    })
}

struct ErasedFn<M, F, A> {
    f: F,
    _marker: PhantomData<fn(M, A)>,
}

struct PreparedFn<M, F, A> {
    f: F,
    args: A,
    _marker: PhantomData<fn(M)>,
}

macro_rules! impl_command_handler {
    ($(($ty:ident, $idx:tt)),*) => {
        #[allow(non_snake_case, unused_variables)]
        impl<M, F, Fut, R, $($ty,)*> CommandHandler<M, ($($ty,)*)> for F
        where
            M: ModalModule,
            F: Fn(Arc<M>, Arc<ModalContext>, $($ty,)*) -> Fut + Clone + Send + Sync + 'static,
            Fut: Future<Output = R> + Send + 'static,
            R: IntoCommandResult + 'static,
            $($ty: ModalArgument,)*
        {
            fn erase(self) -> Arc<dyn ErasedCommandHandler> {
                Arc::new(ErasedFn::<M, F, ($($ty,)*)> {
                    f: self,
                    _marker: PhantomData,
                })
            }
        }

        #[allow(non_snake_case, unused_variables)]
        impl<M, F, Fut, R, $($ty,)*> ErasedCommandHandler for ErasedFn<M, F, ($($ty,)*)>
        where
            M: ModalModule,
            F: Fn(Arc<M>, Arc<ModalContext>, $($ty,)*) -> Fut + Clone + Send + Sync + 'static,
            Fut: Future<Output = R> + Send + 'static,
            R: IntoCommandResult + 'static,
            $($ty: ModalArgument,)*
        {
            fn prepare<'a>(
                &'a self,
                ctx: &'a ModalContext,
                converters: &'a ConverterRegistry,
            ) -> BoxFuture<'a, Result<Box<dyn PreparedInvocation>, DispatchError>> {
                Box::pin(async move {
                    $(let $ty = convert_argument::<$ty>(ctx, $idx, converters).await?;)*
                    Ok(Box::new(PreparedFn::<M, F, ($($ty,)*)> {
                        f: self.f.clone(),
                        args: ($($ty,)*),
                        _marker: PhantomData,
                    }) as Box<dyn PreparedInvocation>)
                })
            }
        }

        #[allow(non_snake_case)]
        impl<M, F, Fut, R, $($ty,)*> PreparedInvocation for PreparedFn<M, F, ($($ty,)*)>
        where
            M: ModalModule,
            F: Fn(Arc<M>, Arc<ModalContext>, $($ty,)*) -> Fut + Clone + Send + Sync + 'static,
            Fut: Future<Output = R> + Send + 'static,
            R: IntoCommandResult + 'static,
            $($ty: ModalArgument,)*
        {
            fn invoke(
                self: Box<Self>,
                services: Arc<ServiceProvider>,
                ctx: Arc<ModalContext>,
            ) -> BoxFuture<'static, Result<InvokeOutcome, DispatchError>> {
                let PreparedFn { f, args, .. } = *self;
                Box::pin(async move {
                    let module = Arc::new(build_module::<M>(&services)?);

                    if !module.before_execution(&ctx).await {
                        return Ok(InvokeOutcome::Skipped);
                    }

                    let ($($ty,)*) = args;
                    match f(Arc::clone(&module), Arc::clone(&ctx), $($ty,)*)
                        .await
                        .into_command_result()
                    {
                        Ok(()) => {
                            module.after_execution(&ctx).await;
                            Ok(InvokeOutcome::Invoked)
                        }
                        Err(err) => Err(DispatchError::Handler(err)),
                    }
                })
            }
        }
    };
}

impl_command_handler!();
impl_command_handler!((T1, 0));
impl_command_handler!((T1, 0), (T2, 1));
impl_command_handler!((T1, 0), (T2, 1), (T3, 2));
impl_command_handler!((T1, 0), (T2, 1), (T3, 2), (T4, 3));
impl_command_handler!((T1, 0), (T2, 1), (T3, 2), (T4, 3), (T5, 4));
impl_command_handler!((T1, 0), (T2, 1), (T3, 2), (T4, 3), (T5, 4), (T6, 5));
impl_command_handler!(
    (T1, 0),
    (T2, 1),
    (T3, 2),
    (T4, 3),
    (T5, 4),
    (T6, 5),
    (T7, 6)
);
impl_command_handler!(
    (T1, 0),
    (T2, 1),
    (T3, 2),
    (T4, 3),
    (T5, 4),
    (T6, 5),
    (T7, 6),
    (T8, 7)
);
