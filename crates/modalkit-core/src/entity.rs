//! Platform entity types.
//!
//! These are the resolved objects the platform hands back for ID lookups.
//! They carry the fields the extension and its converters need; an embedding
//! client maps its own richer SDK objects into these.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A platform user account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    /// Snowflake ID of the user.
    pub id: u64,
    /// Account name.
    pub username: String,
    /// Whether the account belongs to a bot.
    #[serde(default)]
    pub bot: bool,
}

/// A user within a guild, with guild-scoped data attached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Member {
    /// The underlying user.
    pub user: User,
    /// Guild the membership belongs to.
    pub guild_id: u64,
    /// Guild-specific display name, if set.
    #[serde(default)]
    pub nick: Option<String>,
    /// IDs of the roles held by this member.
    #[serde(default)]
    pub roles: Vec<u64>,
}

impl Member {
    /// The name to display for this member: the nickname when set, the
    /// account name otherwise.
    pub fn display_name(&self) -> &str {
        self.nick.as_deref().unwrap_or(&self.user.username)
    }
}

/// A guild role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Role {
    /// Snowflake ID of the role.
    pub id: u64,
    /// Role name.
    pub name: String,
    /// Raw permission bits.
    #[serde(default)]
    pub permissions: u64,
}

/// The kind of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// A text channel inside a guild.
    #[default]
    GuildText,
    /// A direct-message channel.
    Direct,
    /// A voice channel.
    Voice,
    /// A thread under a text channel.
    Thread,
}

/// A messageable channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Channel {
    /// Snowflake ID of the channel.
    pub id: u64,
    /// Channel name. Empty for direct-message channels.
    #[serde(default)]
    pub name: String,
    /// What kind of channel this is.
    #[serde(default)]
    pub kind: ChannelKind,
    /// Owning guild, absent for direct messages.
    #[serde(default)]
    pub guild_id: Option<u64>,
}

/// A guild, carrying its locally cached role table.
///
/// Role lookups are served from this cache synchronously; the platform pushes
/// role updates through its own gateway, so no network round-trip is needed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Guild {
    /// Snowflake ID of the guild.
    pub id: u64,
    /// Guild name.
    pub name: String,
    /// Roles of this guild keyed by ID.
    #[serde(default)]
    pub roles: HashMap<u64, Role>,
}

impl Guild {
    /// Looks up a role in the local cache.
    pub fn role(&self, id: u64) -> Option<&Role> {
        self.roles.get(&id)
    }
}

/// A message, as returned by response and follow-up calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    /// Snowflake ID of the message.
    pub id: u64,
    /// Channel the message was sent in.
    pub channel_id: u64,
    /// Text content.
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_display_name_prefers_nick() {
        let member = Member {
            user: User {
                id: 1,
                username: "account".into(),
                bot: false,
            },
            guild_id: 10,
            nick: Some("nickname".into()),
            roles: vec![],
        };
        assert_eq!(member.display_name(), "nickname");
    }

    #[test]
    fn test_member_display_name_falls_back_to_username() {
        let member = Member {
            user: User {
                id: 1,
                username: "account".into(),
                bot: false,
            },
            guild_id: 10,
            nick: None,
            roles: vec![],
        };
        assert_eq!(member.display_name(), "account");
    }

    #[test]
    fn test_guild_role_cache_lookup() {
        let mut guild = Guild {
            id: 10,
            name: "guild".into(),
            roles: HashMap::new(),
        };
        guild.roles.insert(
            7,
            Role {
                id: 7,
                name: "mods".into(),
                permissions: 0,
            },
        );

        assert_eq!(guild.role(7).map(|r| r.name.as_str()), Some("mods"));
        assert!(guild.role(8).is_none());
    }
}
