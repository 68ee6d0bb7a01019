//! The message structure: components, sections, actions, and the top-level
//! [`SendableMessage`].
//!
//! Everything here is an immutable value. Construction happens through the
//! builders or straight constructors; once built, a value is never mutated,
//! only replaced. That makes messages freely shareable across threads.

use serde::{Deserialize, Serialize};

use crate::colour::{Colour, Styles};

// ---------------------------------------------------------------------------
// ChatComponent
// ---------------------------------------------------------------------------

/// One run of uniformly styled text.
///
/// The text is always present (possibly empty — empty components are dropped
/// when a message is written out). The colour is always fully resolved:
/// "no colour yet" only exists transiently inside the formatting scanner and
/// never escapes into a finished component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatComponent {
    /// The visible text of this run.
    pub text: String,
    /// The resolved 24-bit colour of this run.
    pub colour: Colour,
    /// The styles active for this run.
    pub styles: Styles,
}

impl ChatComponent {
    pub fn new(
        text: impl Into<String>,
        colour: Colour,
        styles: Styles,
    ) -> Self {
        Self {
            text: text.into(),
            colour,
            styles,
        }
    }

    /// An unstyled white run — the state every scan starts from.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Colour::WHITE, Styles::NONE)
    }

    /// `true` when the text is empty. Empty components carry no information
    /// and are skipped by writers.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Click actions
// ---------------------------------------------------------------------------

/// What clicking a section does.
///
/// Closed set: the wire format reserves exactly three click short codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum ClickEventType {
    /// Run the value as a command on behalf of the clicking reader.
    RunCommand,
    /// Place the value into the reader's input box without sending it.
    SuggestCommand,
    /// Open the value as a URL.
    OpenUrl,
}

impl ClickEventType {
    /// The 3-character wire short code for this click type.
    pub fn short_code(self) -> &'static str {
        match self {
            ClickEventType::RunCommand => "cmd",
            ClickEventType::SuggestCommand => "sgt",
            ClickEventType::OpenUrl => "url",
        }
    }

    /// Resolves a wire short code, case-insensitively.
    pub fn from_short_code(code: &str) -> Option<ClickEventType> {
        [
            ClickEventType::RunCommand,
            ClickEventType::SuggestCommand,
            ClickEventType::OpenUrl,
        ]
        .into_iter()
        .find(|t| t.short_code().eq_ignore_ascii_case(code))
    }
}

/// A click action: the type plus its value (command line, suggestion text,
/// or URL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEventInfo {
    pub click_type: ClickEventType,
    pub value: String,
}

impl ClickEventInfo {
    pub fn new(click_type: ClickEventType, value: impl Into<String>) -> Self {
        Self {
            click_type,
            value: value.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// One logically grouped run of styled text plus at most one hover, click,
/// and insertion action.
///
/// The actions are option types — absence is `None`, never an empty string.
/// The hover tooltip is itself an ordered component sequence, so tooltips
/// carry full colour and styling.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Section {
    /// The styled text runs of this section, in display order.
    pub contents: Vec<ChatComponent>,
    /// Tooltip shown while hovering over this section.
    pub hover: Option<Vec<ChatComponent>>,
    /// Action performed when this section is clicked.
    pub click: Option<ClickEventInfo>,
    /// Text inserted into the reader's input box on shift-click.
    pub insertion: Option<String>,
}

impl Section {
    /// `true` when the section has no contents. Actions alone do not make a
    /// section non-empty: there is nothing to hover over or click on.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SendableMessage
// ---------------------------------------------------------------------------

/// The top-level exchanged unit: an ordered sequence of sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SendableMessage {
    pub sections: Vec<Section>,
}

impl SendableMessage {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The message text with all formatting and actions discarded.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            for component in &section.contents {
                out.push_str(&component.text);
            }
        }
        out
    }
}
