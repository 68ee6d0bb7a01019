//! The push-style event contract between the tokenizer and part builders.

use chatwire_message::ClickEventInfo;

use crate::part::ChatMessagePart;

/// Consumer of tokenizer events.
///
/// The tokenizer pushes events in wire order: a `text` event opens a new
/// part; `hover`, `click`, and `insertion` events belong to the most
/// recently opened part. The tokenizer rejects action events with no open
/// part before they reach the sink, so implementations may rely on `text`
/// having been called first.
///
/// This trait is the seam where platform adapters plug in: an adapter that
/// builds native component objects implements `TokenSink` directly instead
/// of going through [`PartCollector`].
pub trait TokenSink {
    /// A plain-text segment. Opens a new part.
    fn text(&mut self, text: &str);

    /// A hover tooltip for the open part.
    fn hover(&mut self, hover: &str);

    /// A click action for the open part.
    fn click(&mut self, click: ClickEventInfo);

    /// An insertion action for the open part.
    fn insertion(&mut self, insertion: &str);
}

/// A [`TokenSink`] that assembles [`ChatMessagePart`]s.
///
/// Repeated action events on one part overwrite: last wins.
#[derive(Debug, Default)]
pub struct PartCollector {
    parts: Vec<ChatMessagePart>,
}

impl PartCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected parts, in wire order.
    pub fn into_parts(self) -> Vec<ChatMessagePart> {
        self.parts
    }
}

impl TokenSink for PartCollector {
    fn text(&mut self, text: &str) {
        self.parts.push(ChatMessagePart::new(text));
    }

    fn hover(&mut self, hover: &str) {
        if let Some(part) = self.parts.last_mut() {
            part.hover = Some(hover.to_owned());
        }
    }

    fn click(&mut self, click: ClickEventInfo) {
        if let Some(part) = self.parts.last_mut() {
            part.click = Some(click);
        }
    }

    fn insertion(&mut self, insertion: &str) {
        if let Some(part) = self.parts.last_mut() {
            part.insertion = Some(insertion.to_owned());
        }
    }
}
