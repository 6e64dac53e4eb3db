//! Per-dispatch context handed to command handlers.

use modalkit_core::{
    ApiResult, BoxedClient, Channel, Guild, Interaction, Member, Message, Response, User,
};

/// The first parameter of every command handler.
///
/// One `ModalContext` is created per dispatched submission, wrapped in an
/// `Arc` and shared between the handler, its module's lifecycle hooks, the
/// argument converters and the lifecycle events. It carries the originating
/// interaction, the platform client and the combined argument list (decoded
/// positional arguments followed by the submitted field values, in that
/// order).
///
/// Response methods forward verbatim to the platform client; the platform's
/// own response-time window applies.
pub struct ModalContext {
    interaction: Interaction,
    client: BoxedClient,
    values: Vec<String>,
}

impl ModalContext {
    pub(crate) fn new(client: BoxedClient, interaction: &Interaction, values: Vec<String>) -> Self {
        Self {
            interaction: interaction.clone(),
            client,
            values,
        }
    }

    /// The originating interaction.
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// The platform client this dispatch runs against.
    pub fn client(&self) -> &BoxedClient {
        &self.client
    }

    /// The guild the form was submitted in, absent for direct messages.
    pub fn guild(&self) -> Option<&Guild> {
        self.interaction.guild.as_ref()
    }

    /// The channel the form was submitted in.
    pub fn channel(&self) -> &Channel {
        &self.interaction.channel
    }

    /// The user who submitted the form.
    pub fn user(&self) -> &User {
        &self.interaction.user
    }

    /// The submitting user's guild membership, when available.
    pub fn member(&self) -> Option<&Member> {
        self.interaction.member.as_ref()
    }

    /// The combined ordered argument list consumed by parameter conversion:
    /// encoded positional arguments first, then submitted field values.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    // ─── Response forwarding ──────────────────────────────────────────────

    /// Creates the initial interaction response.
    pub async fn respond(&self, response: Response) -> ApiResult<()> {
        self.client.create_response(&self.interaction, response).await
    }

    /// Replies with a plain channel message.
    pub async fn reply(&self, content: impl Into<String>) -> ApiResult<()> {
        self.respond(Response::message(content)).await
    }

    /// Defers the response; edit the message in later.
    pub async fn defer(&self) -> ApiResult<()> {
        self.respond(Response::deferred()).await
    }

    /// Edits the initial interaction response.
    pub async fn edit_response(&self, response: Response) -> ApiResult<Message> {
        self.client.edit_response(&self.interaction, response).await
    }

    /// Deletes the initial interaction response.
    pub async fn delete_response(&self) -> ApiResult<()> {
        self.client.delete_response(&self.interaction).await
    }

    /// Sends a follow-up message.
    pub async fn followup(&self, response: Response) -> ApiResult<Message> {
        self.client.create_followup(&self.interaction, response).await
    }

    /// Fetches the initial interaction response.
    pub async fn original_response(&self) -> ApiResult<Message> {
        self.client.get_original_response(&self.interaction).await
    }
}

impl std::fmt::Debug for ModalContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalContext")
            .field("interaction", &self.interaction.id)
            .field("user", &self.interaction.user.id)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
