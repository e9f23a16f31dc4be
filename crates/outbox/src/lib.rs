//! # outbox
//!
//! Outbound message model for transactional email delivery APIs.
//!
//! ## Features
//!
//! - **Message model**: Sender, recipients, subject, bodies, tag
//! - **Recipient formatting**: Display-name and address lists as one header string
//! - **Custom headers**: Ordered, duplicate-preserving header list
//! - **Attachments**: Load files as base64 descriptors with a sniffed content type
//! - **Wire format**: Serializes to the API's JSON shape (`From`, `To`, `HtmlBody`, ...)
//!
//! ## Quick Start
//!
//! ### Building a Message
//!
//! ```ignore
//! use outbox::Message;
//!
//! let mut message = Message::with_html(
//!     "sender@example.com",
//!     "recipient@example.com",
//!     "Welcome",
//!     "<p>Hello!</p>",
//! );
//! message.set_cc_names([("John Smith", "john@example.com")]);
//! message.add_header("X-Campaign", "onboarding");
//!
//! let payload = message.to_json()?;
//! ```
//!
//! ### Working with Attachments
//!
//! ```ignore
//! use outbox::{Attachment, Message};
//!
//! let mut message = Message::new();
//! message.add_attachment_path("report.pdf")?;
//! message.add_attachment(Attachment::from_bytes("note.txt", b"hi", "text/plain"));
//! ```
//!
//! ### Custom Content-Type Detection
//!
//! ```ignore
//! use std::path::Path;
//! use outbox::Message;
//!
//! let detector = |_: &Path, _: &[u8]| "application/x-custom".to_string();
//! let mut message = Message::new();
//! message.add_attachment_path_with("data.bin", &detector)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod attachment;
mod config;
mod detect;
mod error;
mod header;
mod message;

pub mod encoding;
pub mod recipients;

pub use attachment::Attachment;
pub use config::{MessageDefaults, MessageDefaultsBuilder};
pub use detect::{ContentTypeDetector, GuessDetector};
pub use error::{Error, Result};
pub use header::Header;
pub use message::Message;
