//! Shared test fixtures: an in-memory platform client and canned contexts.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use modalkit_core::{
    ApiResult, BoxedClient, Channel, ChatClient, Guild, Interaction, Member, Message, Response,
    Role, User,
};

use crate::context::ModalContext;

/// Entities the mock client can resolve.
#[derive(Default)]
pub(crate) struct TestDirectory {
    users: HashMap<u64, User>,
    channels: HashMap<u64, Channel>,
    members: HashMap<(u64, u64), Member>,
}

impl TestDirectory {
    pub(crate) fn user(mut self, id: u64, username: &str) -> Self {
        self.users.insert(
            id,
            User {
                id,
                username: username.to_string(),
                bot: false,
            },
        );
        self
    }

    pub(crate) fn channel(mut self, id: u64, name: &str) -> Self {
        self.channels.insert(
            id,
            Channel {
                id,
                name: name.to_string(),
                ..Channel::default()
            },
        );
        self
    }

    pub(crate) fn member(mut self, guild_id: u64, user_id: u64, username: &str) -> Self {
        self.members.insert(
            (guild_id, user_id),
            Member {
                user: User {
                    id: user_id,
                    username: username.to_string(),
                    bot: false,
                },
                guild_id,
                nick: None,
                roles: Vec::new(),
            },
        );
        self
    }
}

/// In-memory [`ChatClient`] serving lookups from a [`TestDirectory`] and
/// recording every response payload it receives.
pub(crate) struct MockClient {
    directory: TestDirectory,
    pub(crate) responses: Mutex<Vec<Response>>,
}

#[async_trait]
impl ChatClient for MockClient {
    async fn get_user(&self, id: u64) -> ApiResult<Option<User>> {
        Ok(self.directory.users.get(&id).cloned())
    }

    async fn get_channel(&self, id: u64) -> ApiResult<Option<Channel>> {
        Ok(self.directory.channels.get(&id).cloned())
    }

    async fn get_member(&self, guild_id: u64, user_id: u64) -> ApiResult<Option<Member>> {
        Ok(self.directory.members.get(&(guild_id, user_id)).cloned())
    }

    async fn create_response(
        &self,
        _interaction: &Interaction,
        response: Response,
    ) -> ApiResult<()> {
        self.responses.lock().push(response);
        Ok(())
    }

    async fn edit_response(
        &self,
        _interaction: &Interaction,
        response: Response,
    ) -> ApiResult<Message> {
        self.responses.lock().push(response);
        Ok(Message::default())
    }

    async fn delete_response(&self, _interaction: &Interaction) -> ApiResult<()> {
        Ok(())
    }

    async fn create_followup(
        &self,
        _interaction: &Interaction,
        response: Response,
    ) -> ApiResult<Message> {
        self.responses.lock().push(response);
        Ok(Message::default())
    }

    async fn get_original_response(&self, _interaction: &Interaction) -> ApiResult<Message> {
        Ok(Message::default())
    }
}

pub(crate) fn mock_client() -> BoxedClient {
    mock_client_with(TestDirectory::default())
}

pub(crate) fn mock_client_with(directory: TestDirectory) -> BoxedClient {
    mock_client_concrete(directory)
}

/// Keeps the concrete type so tests can inspect the recorded responses.
pub(crate) fn mock_client_concrete(directory: TestDirectory) -> Arc<MockClient> {
    Arc::new(MockClient {
        directory,
        responses: Mutex::new(Vec::new()),
    })
}

/// An interaction inside guild 42, whose role cache holds role 5 ("mods").
pub(crate) fn guild_interaction() -> Interaction {
    let mut guild = Guild {
        id: 42,
        name: "testers".to_string(),
        roles: HashMap::new(),
    };
    guild.roles.insert(
        5,
        Role {
            id: 5,
            name: "mods".to_string(),
            permissions: 0,
        },
    );

    Interaction {
        id: 1000,
        token: "interaction-token".to_string(),
        guild: Some(guild),
        channel: Channel {
            id: 31,
            name: "general".to_string(),
            ..Channel::default()
        },
        user: User {
            id: 7,
            username: "alice".to_string(),
            bot: false,
        },
        member: None,
    }
}

/// An interaction without a guild (direct message).
pub(crate) fn direct_interaction() -> Interaction {
    Interaction {
        guild: None,
        ..guild_interaction()
    }
}

pub(crate) fn guild_context(client: BoxedClient, values: Vec<String>) -> ModalContext {
    ModalContext::new(client, &guild_interaction(), values)
}

pub(crate) fn direct_context(client: BoxedClient, values: Vec<String>) -> ModalContext {
    ModalContext::new(client, &direct_interaction(), values)
}
