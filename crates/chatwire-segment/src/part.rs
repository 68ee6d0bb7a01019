//! The tokenizer-level message unit.

use serde::{Deserialize, Serialize};

use chatwire_message::ClickEventInfo;

/// One colour-agnostic message part: plain text plus raw action strings.
///
/// This is what the segment layer trades in. The text may still contain
/// inline formatting codes — resolving those into styled components is the
/// formatting scanner's job, one layer up. Actions are option types;
/// absence is `None`, never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatMessagePart {
    /// The part's plain text, always present.
    pub text: String,
    /// Raw hover string (may contain inline formatting codes).
    pub hover: Option<String>,
    /// Click action for this part.
    pub click: Option<ClickEventInfo>,
    /// Raw insertion string.
    pub insertion: Option<String>,
}

impl ChatMessagePart {
    /// A part with the given text and no actions.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}
