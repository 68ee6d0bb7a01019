//! Format-specific codecs: the compositions of scanner, tokenizer, and
//! reconstitutor against the canonical message model.
//!
//! Each codec guarantees that decoding its own encoded output reproduces
//! the original message structurally. Cross-codec round-tripping is not
//! guaranteed: the classic codec cannot represent hex colours, and the
//! plain-text codec is lossy on purpose.

use tracing::{debug, trace};

use chatwire_format::{render, scan, CodeFamily, ScanState};
use chatwire_message::{ChatComponent, Section, SendableMessage};
use chatwire_segment::{ChatMessagePart, PartCollector, Reconstitutor, SegmentTokenizer};

use crate::error::DecodeError;

// ---------------------------------------------------------------------------
// MessageCodec
// ---------------------------------------------------------------------------

/// A chat message codec: one wire dialect, both directions.
///
/// Implementations form a closed set — the three codecs below cover the
/// supported dialects. The trait exists so callers can pick a dialect at
/// runtime and so tests can treat all codecs uniformly.
pub trait MessageCodec {
    /// Encodes a message into one wire string.
    fn encode(&self, message: &SendableMessage) -> String;

    /// Decodes wire text back into a message.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the wire text violates the segment
    /// protocol (an action segment with no preceding text part).
    fn decode(&self, wire: &str) -> Result<SendableMessage, DecodeError>;
}

/// The full wire dialect: tagged segments plus both code families,
/// including `<#...>` hex colour literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractiveCodec;

/// The tagged-segment dialect restricted to legacy `&x` codes. Hex colour
/// literals pass through as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicCodec;

/// Formatting-free dialect: encode strips all formatting and actions,
/// decode wraps the raw input in one unstyled section. Intentionally lossy
/// and non-invertible.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextCodec;

impl MessageCodec for InteractiveCodec {
    fn encode(&self, message: &SendableMessage) -> String {
        encode_tagged(message, CodeFamily::All)
    }

    fn decode(&self, wire: &str) -> Result<SendableMessage, DecodeError> {
        decode_tagged(wire, CodeFamily::All)
    }
}

impl MessageCodec for ClassicCodec {
    fn encode(&self, message: &SendableMessage) -> String {
        encode_tagged(message, CodeFamily::Legacy)
    }

    fn decode(&self, wire: &str) -> Result<SendableMessage, DecodeError> {
        decode_tagged(wire, CodeFamily::Legacy)
    }
}

impl MessageCodec for PlainTextCodec {
    fn encode(&self, message: &SendableMessage) -> String {
        message.plain_text()
    }

    fn decode(&self, wire: &str) -> Result<SendableMessage, DecodeError> {
        if wire.is_empty() {
            return Ok(SendableMessage::default());
        }
        Ok(SendableMessage {
            sections: vec![Section {
                contents: vec![ChatComponent::plain(wire)],
                ..Section::default()
            }],
        })
    }
}

// ---------------------------------------------------------------------------
// Tagged-dialect plumbing
// ---------------------------------------------------------------------------

fn encode_tagged(message: &SendableMessage, family: CodeFamily) -> String {
    trace!(
        sections = message.sections.len(),
        ?family,
        "encoding message"
    );
    let mut writer = Reconstitutor::new();
    let mut written = 0usize;
    for section in &message.sections {
        let text = render(&section.contents, family);
        if text.is_empty() {
            // Nothing visible to attach actions to; dropped on write.
            continue;
        }
        let part = ChatMessagePart {
            text,
            hover: section
                .hover
                .as_ref()
                .map(|tooltip| render(tooltip, family))
                .filter(|rendered| !rendered.is_empty()),
            click: section.click.clone(),
            insertion: section.insertion.clone(),
        };
        writer.part(&part);
        written += 1;
    }
    let wire = writer.finish();
    debug!(
        sections = message.sections.len(),
        parts = written,
        bytes = wire.len(),
        "encoded message"
    );
    wire
}

fn decode_tagged(
    wire: &str,
    family: CodeFamily,
) -> Result<SendableMessage, DecodeError> {
    let mut collector = PartCollector::new();
    SegmentTokenizer::new(wire).run(&mut collector)?;
    let parts = collector.into_parts();
    debug!(bytes = wire.len(), parts = parts.len(), "decoded wire text");

    let sections = parts
        .into_iter()
        .map(|part| Section {
            contents: scan(&part.text, ScanState::default(), family),
            hover: part
                .hover
                .map(|hover| scan(&hover, ScanState::default(), family)),
            click: part.click,
            insertion: part.insertion,
        })
        .collect();
    Ok(SendableMessage { sections })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatwire_message::{Colour, SectionBuilder, Styles};

    #[test]
    fn test_interactive_encode_basic_section() {
        let mut builder = SectionBuilder::new();
        builder
            .text("Hello ", Colour::RED, Styles::NONE)
            .text("World", Colour::RED, Styles::BOLD);
        let message = SendableMessage {
            sections: vec![builder.build()],
        };
        assert_eq!(InteractiveCodec.encode(&message), "&cHello &lWorld");
    }

    #[test]
    fn test_empty_sections_are_dropped_on_encode() {
        let message = SendableMessage {
            sections: vec![Section::default()],
        };
        assert_eq!(InteractiveCodec.encode(&message), "");
    }

    #[test]
    fn test_decode_splits_sections_at_delimiters() {
        let message = InteractiveCodec.decode("one||two").unwrap();
        assert_eq!(message.sections.len(), 2);
        assert_eq!(message.sections[0].contents[0].text, "one");
        assert_eq!(message.sections[1].contents[0].text, "two");
    }

    #[test]
    fn test_decode_scans_hover_text() {
        let message = InteractiveCodec.decode("x||ttp:&ctip").unwrap();
        let hover = message.sections[0].hover.as_ref().unwrap();
        assert_eq!(hover[0].text, "tip");
        assert_eq!(hover[0].colour, Colour::RED);
    }

    #[test]
    fn test_sections_decode_with_fresh_state() {
        // Colour from one section does not leak into the next.
        let message = InteractiveCodec.decode("&cred||plain").unwrap();
        assert_eq!(message.sections[0].contents[0].colour, Colour::RED);
        assert_eq!(message.sections[1].contents[0].colour, Colour::WHITE);
    }

    #[test]
    fn test_classic_decode_keeps_hex_literal_as_text() {
        let message = ClassicCodec.decode("<#4BC>X").unwrap();
        assert_eq!(message.sections[0].contents[0].text, "<#4BC>X");
        assert_eq!(message.sections[0].contents[0].colour, Colour::WHITE);
    }

    #[test]
    fn test_plain_codec_strips_everything() {
        let mut builder = SectionBuilder::new();
        builder
            .text("Hi ", Colour::GOLD, Styles::BOLD)
            .hover(vec![ChatComponent::plain("unseen")])
            .insertion("unseen");
        let message = SendableMessage {
            sections: vec![builder.build()],
        };
        assert_eq!(PlainTextCodec.encode(&message), "Hi ");
    }

    #[test]
    fn test_plain_codec_decode_is_one_unstyled_section() {
        let message = PlainTextCodec.decode("&cnot a code here").unwrap();
        assert_eq!(message.sections.len(), 1);
        assert_eq!(
            message.sections[0].contents,
            vec![ChatComponent::plain("&cnot a code here")]
        );
    }

    #[test]
    fn test_plain_codec_decode_empty_is_empty_message() {
        assert!(PlainTextCodec.decode("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_orphaned_action() {
        let err = InteractiveCodec.decode("ttp:orphan").unwrap_err();
        assert!(matches!(err, DecodeError::Segment(_)));
    }
}
