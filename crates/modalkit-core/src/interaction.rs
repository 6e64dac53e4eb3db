//! Interaction and modal submission types.
//!
//! An [`Interaction`] is the platform's reference to one user action (here:
//! submitting a modal form). The platform enforces its own response-time
//! window on interactions; this crate only carries the references, it does
//! not enforce any deadline.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::entity::{Channel, Guild, Member, User};

/// A reference to the originating interaction of a modal submission.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    /// Snowflake ID of the interaction.
    pub id: u64,
    /// One-time token used for responding to this interaction.
    pub token: String,
    /// Guild the interaction happened in, absent for direct messages.
    pub guild: Option<Guild>,
    /// Channel the interaction happened in.
    pub channel: Channel,
    /// User who submitted the form.
    pub user: User,
    /// Guild membership of the submitting user, when available.
    pub member: Option<Member>,
}

/// A modal submission delivered by the platform.
///
/// One `ModalSubmit` exists per submission. The `handled` flag is the
/// platform-level acknowledgment: the event source inspects it after all
/// subscribers ran and applies its timeout/fallback behaviour when nothing
/// claimed the submission.
#[derive(Debug)]
pub struct ModalSubmit {
    /// The identifier token the form was created with, echoed back verbatim.
    pub custom_id: String,
    /// Submitted field values, in the order the inputs were attached.
    pub values: Vec<String>,
    /// The originating interaction.
    pub interaction: Interaction,
    handled: AtomicBool,
}

impl ModalSubmit {
    /// Creates a submission event as delivered by the platform.
    pub fn new(custom_id: impl Into<String>, values: Vec<String>, interaction: Interaction) -> Self {
        Self {
            custom_id: custom_id.into(),
            values,
            interaction,
            handled: AtomicBool::new(false),
        }
    }

    /// Marks the submission as handled (acknowledged).
    pub fn mark_handled(&self) {
        self.handled.store(true, Ordering::SeqCst);
    }

    /// Whether some subscriber claimed this submission.
    pub fn is_handled(&self) -> bool {
        self.handled.load(Ordering::SeqCst)
    }
}

/// The kind of an interaction response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// Send a message in the channel.
    ChannelMessage,
    /// Acknowledge now, edit the message in later.
    DeferredChannelMessage,
    /// Present a modal form to the user.
    Modal,
}

/// The visual style of a text input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextInputStyle {
    /// Single-line input.
    #[default]
    Short,
    /// Multi-line input.
    Paragraph,
}

/// One text input row of a modal form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextInput {
    /// Per-form identifier of this input.
    pub custom_id: String,
    /// Label shown above the input.
    pub label: String,
    /// Input style.
    #[serde(default)]
    pub style: TextInputStyle,
    /// Whether the field must be filled before submitting.
    #[serde(default)]
    pub required: bool,
    /// Pre-filled value.
    #[serde(default)]
    pub value: Option<String>,
    /// Placeholder shown while empty.
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl TextInput {
    /// Creates a short, required text input.
    pub fn new(custom_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            custom_id: custom_id.into(),
            label: label.into(),
            style: TextInputStyle::Short,
            required: true,
            value: None,
            placeholder: None,
        }
    }

    /// Sets the input style.
    pub fn style(mut self, style: TextInputStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets whether the field is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets a pre-filled value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// An interaction response payload, forwarded verbatim to the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// What kind of response this is.
    pub kind: ResponseKind,
    /// Message content, for message responses.
    #[serde(default)]
    pub content: Option<String>,
    /// Whether the message is only visible to the submitting user.
    #[serde(default)]
    pub ephemeral: bool,
    /// Identifier token, for modal responses.
    #[serde(default)]
    pub custom_id: Option<String>,
    /// Form title, for modal responses.
    #[serde(default)]
    pub title: Option<String>,
    /// Text input rows, for modal responses.
    #[serde(default)]
    pub inputs: Vec<TextInput>,
}

impl Response {
    /// Creates a plain channel-message response.
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::ChannelMessage,
            content: Some(content.into()),
            ephemeral: false,
            custom_id: None,
            title: None,
            inputs: Vec::new(),
        }
    }

    /// Creates a deferred acknowledgment; the actual message is edited in
    /// later.
    pub fn deferred() -> Self {
        Self {
            kind: ResponseKind::DeferredChannelMessage,
            content: None,
            ephemeral: false,
            custom_id: None,
            title: None,
            inputs: Vec::new(),
        }
    }

    /// Creates an empty modal response; the extension's form builder fills in
    /// the custom id.
    pub fn modal() -> Self {
        Self {
            kind: ResponseKind::Modal,
            content: None,
            ephemeral: false,
            custom_id: None,
            title: None,
            inputs: Vec::new(),
        }
    }

    /// Marks a message response as ephemeral.
    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_starts_unhandled() {
        let submit = ModalSubmit::new("mk:test", vec![], Interaction::default());
        assert!(!submit.is_handled());
        submit.mark_handled();
        assert!(submit.is_handled());
    }

    #[test]
    fn test_text_input_builder() {
        let input = TextInput::new("rating", "Rating")
            .style(TextInputStyle::Paragraph)
            .required(false)
            .placeholder("1-5");
        assert_eq!(input.custom_id, "rating");
        assert_eq!(input.style, TextInputStyle::Paragraph);
        assert!(!input.required);
        assert_eq!(input.placeholder.as_deref(), Some("1-5"));
    }
}
