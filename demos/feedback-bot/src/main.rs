//! Feedback Bot Demo
//!
//! Demonstrates the modalkit pipeline end to end against an in-memory
//! platform client:
//!
//! 1. Register a module whose commands are declared in `commands()`
//! 2. Build a modal form whose token encodes the command plus a positional
//!    argument
//! 3. Feed a simulated submission back through `handle_submission`
//! 4. Watch the lifecycle events fire
//!
//! # Usage
//!
//! ```bash
//! cargo run --package feedback-bot
//! ```

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

use modalkit::core::{Channel, Guild, Member, Message, User};
use modalkit::prelude::*;

// ============================================================================
// In-memory platform client
// ============================================================================

/// A stand-in for a real platform SDK: lookups are served from fixed data
/// and responses are logged instead of sent.
struct DemoClient;

#[async_trait]
impl ChatClient for DemoClient {
    async fn get_user(&self, id: u64) -> ApiResult<Option<User>> {
        Ok(Some(User {
            id,
            username: format!("user-{id}"),
            bot: false,
        }))
    }

    async fn get_channel(&self, id: u64) -> ApiResult<Option<Channel>> {
        Ok(Some(Channel {
            id,
            name: "feedback".to_string(),
            ..Channel::default()
        }))
    }

    async fn get_member(&self, _guild_id: u64, _user_id: u64) -> ApiResult<Option<Member>> {
        Ok(None)
    }

    async fn create_response(&self, _interaction: &Interaction, response: Response) -> ApiResult<()> {
        info!(content = ?response.content, "client: response created");
        Ok(())
    }

    async fn edit_response(
        &self,
        _interaction: &Interaction,
        _response: Response,
    ) -> ApiResult<Message> {
        Ok(Message::default())
    }

    async fn delete_response(&self, _interaction: &Interaction) -> ApiResult<()> {
        Ok(())
    }

    async fn create_followup(
        &self,
        _interaction: &Interaction,
        _response: Response,
    ) -> ApiResult<Message> {
        Ok(Message::default())
    }

    async fn get_original_response(&self, _interaction: &Interaction) -> ApiResult<Message> {
        Ok(Message::default())
    }
}

// ============================================================================
// Feedback storage service
// ============================================================================

/// Injected into the module through the service provider.
#[derive(Default)]
struct FeedbackStore {
    entries: parking_lot::Mutex<Vec<(u32, String)>>,
}

impl FeedbackStore {
    fn add(&self, rating: u32, text: String) {
        self.entries.lock().push((rating, text));
    }

    fn count(&self) -> usize {
        self.entries.lock().len()
    }
}

// ============================================================================
// Command module
// ============================================================================

struct FeedbackModule {
    store: Arc<FeedbackStore>,
}

#[async_trait]
impl ModalModule for FeedbackModule {
    fn construct(services: &ServiceProvider) -> Result<Self, ServiceError> {
        Ok(Self {
            store: services.get_required()?,
        })
    }

    fn commands(set: &mut CommandSet<Self>) {
        set.add("feedback", Self::feedback);
    }

    async fn before_execution(&self, ctx: &ModalContext) -> bool {
        // Bots do not get to rate us.
        !ctx.user().bot
    }
}

impl FeedbackModule {
    /// `topic` comes encoded in the token; `rating` and `text` come from the
    /// form's input fields.
    async fn feedback(
        self: Arc<Self>,
        ctx: Arc<ModalContext>,
        topic: String,
        rating: u32,
        text: String,
    ) {
        self.store.add(rating, text.clone());
        if let Err(e) = ctx
            .reply(format!("Thanks! {topic} rated {rating}/5: {text}"))
            .await
        {
            error!("failed to reply: {e}");
        }
    }
}

// ============================================================================
// Main entry point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,modalkit_commands=debug".into()),
        )
        .init();

    let services = ServiceProvider::new().provide(Arc::new(FeedbackStore::default()));
    let commands = ModalCommands::new(
        ModalConfig::default().prefix("fb:").services(services),
    );
    commands.register_modals::<FeedbackModule>()?;

    commands.on_executed(|event| async move {
        info!(command = %event.command, modal_id = %event.modal_id, "command executed");
    });
    commands.on_errored(|event| async move {
        error!(command = %event.command, error = %event.error, "command failed");
    });

    // Build the form an application would present to the user.
    let form = commands
        .form("feedback")
        .arg("onboarding")
        .title("Send feedback")
        .input(TextInput::new("rating", "Rating (1-5)"))
        .input(TextInput::new("text", "Your feedback"))
        .build();
    let token = form.custom_id.clone().expect("modal forms carry a token");
    info!(%token, "form built");

    // Simulate the user filling the two inputs and submitting.
    let client: BoxedClient = Arc::new(DemoClient);
    let interaction = Interaction {
        id: 1,
        token: "demo-token".to_string(),
        guild: Some(Guild {
            id: 42,
            name: "demo".to_string(),
            ..Guild::default()
        }),
        channel: Channel {
            id: 7,
            name: "feedback".to_string(),
            ..Channel::default()
        },
        user: User {
            id: 99,
            username: "alice".to_string(),
            bot: false,
        },
        member: None,
    };
    let submit = ModalSubmit::new(
        token,
        vec!["4".to_string(), "great onboarding flow".to_string()],
        interaction,
    );

    commands.handle_submission(Arc::clone(&client), &submit).await;

    info!(handled = submit.is_handled(), "submission dispatched");
    Ok(())
}
