//! Per-sender message defaults.

use crate::error::Result;
use crate::header::Header;
use crate::message::Message;
use serde::{Deserialize, Serialize};

/// Values applied to every message a sender creates.
///
/// Loaded from JSON or assembled with [`MessageDefaults::builder`]. Defaults
/// only fill fields the message has not set yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageDefaults {
    /// Default sender address.
    pub from: Option<String>,
    /// Default Reply-To address.
    pub reply_to: Option<String>,
    /// Default tag.
    pub tag: Option<String>,
    /// Headers added to messages that have none.
    pub headers: Vec<Header>,
}

impl MessageDefaults {
    /// Creates a defaults builder.
    #[must_use]
    pub fn builder() -> MessageDefaultsBuilder {
        MessageDefaultsBuilder::default()
    }

    /// Loads defaults from JSON.
    ///
    /// Keys are snake case (`from`, `reply_to`, `tag`, `headers`); missing
    /// keys are left unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON for this shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Creates a new message with these defaults applied.
    #[must_use]
    pub fn new_message(&self) -> Message {
        let mut message = Message::new();
        self.apply(&mut message);
        message
    }

    /// Fills unset fields of `message` from these defaults.
    pub fn apply(&self, message: &mut Message) {
        if let Some(from) = self.from.as_ref().filter(|_| message.from().is_none()) {
            message.set_from(from.clone());
        }
        if let Some(reply_to) = self.reply_to.as_ref().filter(|_| message.reply_to().is_none()) {
            message.set_reply_to(reply_to.clone());
        }
        if let Some(tag) = self.tag.as_ref().filter(|_| message.tag().is_none()) {
            message.set_tag(tag.clone());
        }
        if message.headers().is_none_or(<[Header]>::is_empty) && !self.headers.is_empty() {
            message.set_headers(self.headers.clone());
        }
    }
}

/// Builder for message defaults.
#[derive(Debug, Clone, Default)]
pub struct MessageDefaultsBuilder {
    defaults: MessageDefaults,
}

impl MessageDefaultsBuilder {
    /// Sets the default sender.
    #[must_use]
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.defaults.from = Some(from.into());
        self
    }

    /// Sets the default Reply-To address.
    #[must_use]
    pub fn reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.defaults.reply_to = Some(reply_to.into());
        self
    }

    /// Sets the default tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.defaults.tag = Some(tag.into());
        self
    }

    /// Adds a default header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.headers.push(Header::new(name, value));
        self
    }

    /// Builds the defaults.
    #[must_use]
    pub fn build(self) -> MessageDefaults {
        self.defaults
    }
}
