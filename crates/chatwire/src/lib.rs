//! # chatwire
//!
//! Rich, interactive chat messages in a single plain-text string.
//!
//! A message carries per-run colour and styling, hover tooltips, click
//! actions, and insertion actions. On the wire it is one string: segments
//! delimited by `||`, each classified by a 4-character tag, with inline
//! `&x` and `<#...>` formatting codes inside text segments. This crate
//! composes the layers into ready-to-use codecs:
//!
//! ```text
//! SendableMessage ── render ──→ parts ── reconstitute ──→ wire text
//!                 ←── scan ───        ←── tokenize ────
//! ```
//!
//! - [`chatwire_message`] — the canonical model and its builders.
//! - [`chatwire_format`] — inline code scanning and rendering.
//! - [`chatwire_segment`] — segment tokenizing and reconstituting.
//!
//! ## Quick start
//!
//! ```rust
//! use chatwire::{
//!     ClickEventType, Colour, InteractiveCodec, MessageBuilder,
//!     MessageCodec, SectionBuilder, Styles,
//! };
//!
//! let mut section = SectionBuilder::new();
//! section
//!     .text("click me", Colour::AQUA, Styles::UNDERLINE)
//!     .click(ClickEventType::OpenUrl, "https://example.com");
//!
//! let mut message = MessageBuilder::new();
//! message.section(section.build());
//! let message = message.build();
//!
//! let wire = InteractiveCodec.encode(&message);
//! assert_eq!(wire, "&b&nclick me||url:https://example.com");
//!
//! let decoded = InteractiveCodec.decode(&wire)?;
//! assert_eq!(decoded, message);
//! # Ok::<(), chatwire::DecodeError>(())
//! ```
//!
//! Every codec guarantees `decode(encode(m)) == m` for messages it itself
//! produced; [`PlainTextCodec`] is the deliberate exception and strips all
//! formatting.

mod codec;
mod error;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use codec::{ClassicCodec, InteractiveCodec, MessageCodec, PlainTextCodec};
pub use error::DecodeError;

pub use chatwire_format::{render, scan, CodeFamily, ScanState};
pub use chatwire_message::{
    ChatComponent, ClickEventInfo, ClickEventType, Colour, MessageBuilder,
    Section, SectionBuilder, SendableMessage, Styles,
};
pub use chatwire_segment::{
    reconstitute, tokenize, ChatMessagePart, PartCollector, Reconstitutor,
    SegmentError, SegmentTokenizer, TokenSink,
};
