//! Command modules and per-dispatch instance construction.

use async_trait::async_trait;

use crate::command::CommandSet;
use crate::context::ModalContext;
use crate::error::ServiceError;
use crate::services::ServiceProvider;

/// A user-defined type grouping related modal commands.
///
/// A fresh instance is constructed for every dispatched submission and
/// dropped when the dispatch completes — modules hold per-dispatch state and
/// injected dependencies, never long-lived caches.
///
/// # Example
///
/// ```rust,ignore
/// struct FeedbackModule {
///     store: Arc<FeedbackStore>,   // required dependency
///     metrics: Option<Arc<Metrics>>, // best-effort dependency
/// }
///
/// #[async_trait]
/// impl ModalModule for FeedbackModule {
///     fn construct(services: &ServiceProvider) -> Result<Self, ServiceError> {
///         Ok(Self {
///             store: services.get_required()?,
///             metrics: None,
///         })
///     }
///
///     fn inject(&mut self, services: &ServiceProvider) {
///         self.metrics = services.get_optional();
///     }
///
///     fn commands(set: &mut CommandSet<Self>) {
///         set.add("feedback", Self::feedback);
///     }
/// }
///
/// impl FeedbackModule {
///     async fn feedback(self: Arc<Self>, ctx: Arc<ModalContext>, rating: u32, text: String) {
///         // ...
///     }
/// }
/// ```
#[async_trait]
pub trait ModalModule: Sized + Send + Sync + 'static {
    /// Constructs the module, resolving required dependencies from the
    /// provider.
    ///
    /// A missing required dependency fails the dispatch through the error
    /// lifecycle event.
    fn construct(services: &ServiceProvider) -> Result<Self, ServiceError>;

    /// Best-effort post-construction injection of optional dependencies.
    ///
    /// Called once right after [`construct`](Self::construct). Absent
    /// services are skipped silently; this hook cannot fail.
    fn inject(&mut self, services: &ServiceProvider) {
        let _ = services;
    }

    /// Declares this module's commands.
    fn commands(set: &mut CommandSet<Self>);

    /// Runs before the command handler; returning `false` stops the dispatch
    /// silently (no invocation, no lifecycle event).
    async fn before_execution(&self, ctx: &ModalContext) -> bool {
        let _ = ctx;
        true
    }

    /// Runs after the command handler completed successfully.
    async fn after_execution(&self, ctx: &ModalContext) {
        let _ = ctx;
    }
}

/// Constructs a fresh module instance: constructor injection, then
/// best-effort member injection.
pub(crate) fn build_module<M: ModalModule>(services: &ServiceProvider) -> Result<M, ServiceError> {
    let mut module = M::construct(services)?;
    module.inject(services);
    Ok(module)
}
