//! # Modalkit Core
//!
//! Platform-facing types for the modalkit extension.
//!
//! This crate defines the boundary between modalkit and the chat platform
//! client it extends:
//!
//! - **Entities**: users, guild members, roles, channels, guilds and messages
//!   as resolved from the platform ([`User`], [`Member`], [`Role`],
//!   [`Channel`], [`Guild`], [`Message`])
//! - **Interactions**: the originating interaction reference, the modal
//!   submission event and the response payloads forwarded back to the
//!   platform ([`Interaction`], [`ModalSubmit`], [`Response`])
//! - **Client abstraction**: the [`ChatClient`] trait the dispatch pipeline
//!   and the built-in entity converters are written against
//!
//! The actual network protocol is out of scope: an embedding application
//! implements [`ChatClient`] on top of its platform SDK and feeds incoming
//! modal submissions to the extension.

pub mod client;
pub mod entity;
pub mod error;
pub mod interaction;

pub use client::{BoxedClient, ChatClient};
pub use entity::{Channel, ChannelKind, Guild, Member, Message, Role, User};
pub use error::{ApiError, ApiResult};
pub use interaction::{
    Interaction, ModalSubmit, Response, ResponseKind, TextInput, TextInputStyle,
};
