//! Built-in converters for platform entity references.
//!
//! Entity arguments travel as decimal snowflake IDs. Each converter first
//! parses the raw string as a `u64` (absent on failure), then resolves the
//! ID: users, channels and members through the client's async lookups, roles
//! synchronously against the guild's local role cache. A missing entity is
//! absent; a failed platform call is a converter error.

use async_trait::async_trait;

use modalkit_core::{Channel, Member, Role, User};

use crate::context::ModalContext;

use super::{ArgumentConverter, ConverterResult};

/// Resolves a user ID through the client.
pub struct UserConverter;

#[async_trait]
impl ArgumentConverter<User> for UserConverter {
    async fn from_submitted(&self, value: &str, ctx: &ModalContext) -> ConverterResult<User> {
        let Ok(id) = value.parse::<u64>() else {
            return Ok(None);
        };
        Ok(ctx.client().get_user(id).await?)
    }

    fn to_submitted(&self, value: &User) -> String {
        value.id.to_string()
    }
}

/// Resolves a member ID through the client, scoped to the context's guild.
///
/// Absent outside a guild (direct-message submissions have no members).
pub struct MemberConverter;

#[async_trait]
impl ArgumentConverter<Member> for MemberConverter {
    async fn from_submitted(&self, value: &str, ctx: &ModalContext) -> ConverterResult<Member> {
        let Ok(id) = value.parse::<u64>() else {
            return Ok(None);
        };
        let Some(guild) = ctx.guild() else {
            return Ok(None);
        };
        Ok(ctx.client().get_member(guild.id, id).await?)
    }

    fn to_submitted(&self, value: &Member) -> String {
        value.user.id.to_string()
    }
}

/// Resolves a role ID against the guild's local role cache (no network).
pub struct RoleConverter;

#[async_trait]
impl ArgumentConverter<Role> for RoleConverter {
    async fn from_submitted(&self, value: &str, ctx: &ModalContext) -> ConverterResult<Role> {
        let Ok(id) = value.parse::<u64>() else {
            return Ok(None);
        };
        Ok(ctx.guild().and_then(|guild| guild.role(id)).cloned())
    }

    fn to_submitted(&self, value: &Role) -> String {
        value.id.to_string()
    }
}

/// Resolves a channel ID through the client.
pub struct ChannelConverter;

#[async_trait]
impl ArgumentConverter<Channel> for ChannelConverter {
    async fn from_submitted(&self, value: &str, ctx: &ModalContext) -> ConverterResult<Channel> {
        let Ok(id) = value.parse::<u64>() else {
            return Ok(None);
        };
        Ok(ctx.client().get_channel(id).await?)
    }

    fn to_submitted(&self, value: &Channel) -> String {
        value.id.to_string()
    }
}
