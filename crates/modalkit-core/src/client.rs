//! The chat platform client abstraction.
//!
//! [`ChatClient`] is the seam between modalkit and the platform SDK. The
//! dispatch pipeline and the built-in entity converters only ever talk to
//! this trait, which keeps the extension testable against in-memory fakes
//! and portable across client implementations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::entity::{Channel, Member, Message, User};
use crate::error::ApiResult;
use crate::interaction::{Interaction, Response};

/// Operations the extension needs from the platform client.
///
/// Entity lookups return `Ok(None)` when the entity does not exist; `Err` is
/// reserved for transport-level failures. Role lookups are intentionally
/// absent here — roles are served synchronously from the guild's local cache
/// (see [`Guild::role`](crate::entity::Guild::role)).
///
/// # Example implementation
///
/// ```rust,ignore
/// struct MyClient { /* platform SDK handle */ }
///
/// #[async_trait]
/// impl ChatClient for MyClient {
///     async fn get_user(&self, id: u64) -> ApiResult<Option<User>> {
///         self.sdk.fetch_user(id).await.map_err(into_api_error)
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Fetches a user by ID.
    async fn get_user(&self, id: u64) -> ApiResult<Option<User>>;

    /// Fetches a channel by ID.
    async fn get_channel(&self, id: u64) -> ApiResult<Option<Channel>>;

    /// Fetches a guild member by guild and user ID.
    async fn get_member(&self, guild_id: u64, user_id: u64) -> ApiResult<Option<Member>>;

    /// Creates the initial response to an interaction.
    async fn create_response(
        &self,
        interaction: &Interaction,
        response: Response,
    ) -> ApiResult<()>;

    /// Edits the initial interaction response.
    async fn edit_response(
        &self,
        interaction: &Interaction,
        response: Response,
    ) -> ApiResult<Message>;

    /// Deletes the initial interaction response.
    async fn delete_response(&self, interaction: &Interaction) -> ApiResult<()>;

    /// Sends a follow-up message for an interaction.
    async fn create_followup(
        &self,
        interaction: &Interaction,
        response: Response,
    ) -> ApiResult<Message>;

    /// Fetches the initial interaction response.
    async fn get_original_response(&self, interaction: &Interaction) -> ApiResult<Message>;
}

/// A shared, type-erased client handle.
pub type BoxedClient = Arc<dyn ChatClient>;
