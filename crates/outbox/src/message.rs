//! Outbound message model.

use crate::attachment::Attachment;
use crate::detect::{ContentTypeDetector, GuessDetector};
use crate::error::Result;
use crate::header::Header;
use crate::recipients::{format_addresses, format_named};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outbound email message, ready to hand to a sending client.
///
/// Recipient fields hold the final comma-separated string sent on the wire.
/// The structured setters (`set_to_names`, `set_to_addresses`, ...) format
/// their input into that string and replace whatever was there before.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bcc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<Vec<Header>>,
    #[serde(default)]
    attachments: Vec<Attachment>,
}

impl Message {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a message with sender, recipient, subject and HTML body.
    #[must_use]
    pub fn with_html(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
            subject: Some(subject.into()),
            html_body: Some(html_body.into()),
            ..Self::default()
        }
    }

    /// Creates a message with both HTML and plain-text bodies.
    #[must_use]
    pub fn with_bodies(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        html_body: impl Into<String>,
        text_body: impl Into<String>,
    ) -> Self {
        Self {
            text_body: Some(text_body.into()),
            ..Self::with_html(from, to, subject, html_body)
        }
    }

    /// Gets the sender.
    #[must_use]
    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    /// Sets the sender.
    pub fn set_from(&mut self, from: impl Into<String>) {
        self.from = Some(from.into());
    }

    /// Gets the To recipients.
    #[must_use]
    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    /// Sets the To recipients verbatim.
    pub fn set_to(&mut self, to: impl Into<String>) {
        self.to = Some(to.into());
    }

    /// Sets the To recipients from `(display name, address)` pairs.
    pub fn set_to_names<I, N, A>(&mut self, recipients: I)
    where
        I: IntoIterator<Item = (N, A)>,
        N: AsRef<str>,
        A: AsRef<str>,
    {
        self.to = Some(format_named(recipients));
    }

    /// Sets the To recipients from bare addresses.
    pub fn set_to_addresses<I, A>(&mut self, addresses: I)
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        self.to = Some(format_addresses(addresses));
    }

    /// Gets the Cc recipients.
    #[must_use]
    pub fn cc(&self) -> Option<&str> {
        self.cc.as_deref()
    }

    /// Sets the Cc recipients verbatim.
    pub fn set_cc(&mut self, cc: impl Into<String>) {
        self.cc = Some(cc.into());
    }

    /// Sets the Cc recipients from `(display name, address)` pairs.
    pub fn set_cc_names<I, N, A>(&mut self, recipients: I)
    where
        I: IntoIterator<Item = (N, A)>,
        N: AsRef<str>,
        A: AsRef<str>,
    {
        self.cc = Some(format_named(recipients));
    }

    /// Sets the Cc recipients from bare addresses.
    pub fn set_cc_addresses<I, A>(&mut self, addresses: I)
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        self.cc = Some(format_addresses(addresses));
    }

    /// Gets the Bcc recipients.
    #[must_use]
    pub fn bcc(&self) -> Option<&str> {
        self.bcc.as_deref()
    }

    /// Sets the Bcc recipients verbatim.
    pub fn set_bcc(&mut self, bcc: impl Into<String>) {
        self.bcc = Some(bcc.into());
    }

    /// Sets the Bcc recipients from `(display name, address)` pairs.
    pub fn set_bcc_names<I, N, A>(&mut self, recipients: I)
    where
        I: IntoIterator<Item = (N, A)>,
        N: AsRef<str>,
        A: AsRef<str>,
    {
        self.bcc = Some(format_named(recipients));
    }

    /// Sets the Bcc recipients from bare addresses.
    pub fn set_bcc_addresses<I, A>(&mut self, addresses: I)
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        self.bcc = Some(format_addresses(addresses));
    }

    /// Gets the Reply-To address.
    #[must_use]
    pub fn reply_to(&self) -> Option<&str> {
        self.reply_to.as_deref()
    }

    /// Sets the Reply-To address.
    pub fn set_reply_to(&mut self, reply_to: impl Into<String>) {
        self.reply_to = Some(reply_to.into());
    }

    /// Gets the subject.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Sets the subject.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = Some(subject.into());
    }

    /// Gets the HTML body.
    #[must_use]
    pub fn html_body(&self) -> Option<&str> {
        self.html_body.as_deref()
    }

    /// Sets the HTML body.
    pub fn set_html_body(&mut self, html_body: impl Into<String>) {
        self.html_body = Some(html_body.into());
    }

    /// Gets the plain-text body.
    #[must_use]
    pub fn text_body(&self) -> Option<&str> {
        self.text_body.as_deref()
    }

    /// Sets the plain-text body.
    pub fn set_text_body(&mut self, text_body: impl Into<String>) {
        self.text_body = Some(text_body.into());
    }

    /// Gets the tag.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Sets the tag used to categorize the message.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = Some(tag.into());
    }

    /// Gets the custom headers, or `None` if none were ever added.
    #[must_use]
    pub fn headers(&self) -> Option<&[Header]> {
        self.headers.as_deref()
    }

    /// Replaces the custom headers.
    pub fn set_headers(&mut self, headers: Vec<Header>) {
        self.headers = Some(headers);
    }

    /// Appends a custom header. Existing headers with the same name are kept.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let header = Header::new(name, value);
        tracing::trace!(name = %header.name, "Adding header");
        self.headers.get_or_insert_with(Vec::new).push(header);
    }

    /// Removes all custom headers. Does nothing if none were added.
    pub fn clear_headers(&mut self) {
        if let Some(headers) = self.headers.as_mut() {
            tracing::trace!(count = headers.len(), "Clearing headers");
            headers.clear();
        }
    }

    /// Gets the attachments in the order they were added.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Replaces the attachments.
    pub fn set_attachments(&mut self, attachments: Vec<Attachment>) {
        self.attachments = attachments;
    }

    /// Reads a file and attaches it, guessing its content type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read.
    pub fn add_attachment_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.add_attachment_path_with(path, &GuessDetector)
    }

    /// Reads a file and attaches it, using `detector` for the content type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read.
    pub fn add_attachment_path_with(
        &mut self,
        path: impl AsRef<Path>,
        detector: &dyn ContentTypeDetector,
    ) -> Result<()> {
        let attachment = Attachment::from_path(path, detector)?;
        self.add_attachment(attachment);
        Ok(())
    }

    /// Appends a prepared attachment.
    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    /// Appends prepared attachments in order.
    pub fn add_attachments(&mut self, attachments: impl IntoIterator<Item = Attachment>) {
        for attachment in attachments {
            self.add_attachment(attachment);
        }
    }

    /// Serializes the message to the API's JSON wire format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Into::into)
    }

    /// Parses a message from the API's JSON wire format.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid message object.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }
}
