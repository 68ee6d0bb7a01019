//! Mutable builders for the immutable message types.
//!
//! Builders are thread-confined scratch space. Every `build()` clones the
//! accumulated state into a fresh immutable value, so a builder can be built
//! from repeatedly — handy for stamping out near-identical sections.

use crate::colour::{Colour, Styles};
use crate::types::{
    ChatComponent, ClickEventInfo, ClickEventType, Section, SendableMessage,
};

// ---------------------------------------------------------------------------
// SectionBuilder
// ---------------------------------------------------------------------------

/// Assembles a [`Section`]: components in order, then at most one hover,
/// click, and insertion action. Setting an action again replaces it.
#[derive(Debug, Clone, Default)]
pub struct SectionBuilder {
    contents: Vec<ChatComponent>,
    hover: Option<Vec<ChatComponent>>,
    click: Option<ClickEventInfo>,
    insertion: Option<String>,
}

impl SectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a component.
    pub fn component(&mut self, component: ChatComponent) -> &mut Self {
        self.contents.push(component);
        self
    }

    /// Appends a styled text run.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        colour: Colour,
        styles: Styles,
    ) -> &mut Self {
        self.contents.push(ChatComponent::new(text, colour, styles));
        self
    }

    /// Sets the hover tooltip.
    pub fn hover(&mut self, tooltip: Vec<ChatComponent>) -> &mut Self {
        self.hover = Some(tooltip);
        self
    }

    /// Sets the click action.
    pub fn click(
        &mut self,
        click_type: ClickEventType,
        value: impl Into<String>,
    ) -> &mut Self {
        self.click = Some(ClickEventInfo::new(click_type, value));
        self
    }

    /// Sets the insertion action.
    pub fn insertion(&mut self, insertion: impl Into<String>) -> &mut Self {
        self.insertion = Some(insertion.into());
        self
    }

    /// Clones the accumulated state into a fresh [`Section`].
    pub fn build(&self) -> Section {
        Section {
            contents: self.contents.clone(),
            hover: self.hover.clone(),
            click: self.click.clone(),
            insertion: self.insertion.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// MessageBuilder
// ---------------------------------------------------------------------------

/// Assembles a [`SendableMessage`] from sections, preserving order.
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    sections: Vec<Section>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section.
    pub fn section(&mut self, section: Section) -> &mut Self {
        self.sections.push(section);
        self
    }

    /// Clones the accumulated sections into a fresh [`SendableMessage`].
    pub fn build(&self) -> SendableMessage {
        SendableMessage {
            sections: self.sections.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_builder_preserves_component_order() {
        let mut builder = SectionBuilder::new();
        builder
            .text("a", Colour::RED, Styles::NONE)
            .text("b", Colour::RED, Styles::BOLD)
            .text("c", Colour::WHITE, Styles::NONE);
        let section = builder.build();
        let texts: Vec<&str> =
            section.contents.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_build_may_be_called_repeatedly() {
        let mut builder = SectionBuilder::new();
        builder.text("hi", Colour::WHITE, Styles::NONE);
        let first = builder.build();

        builder.insertion("word");
        let second = builder.build();

        // The first build is unaffected by later mutation.
        assert_eq!(first.insertion, None);
        assert_eq!(second.insertion.as_deref(), Some("word"));
        assert_eq!(first.contents, second.contents);
    }

    #[test]
    fn test_setting_an_action_again_replaces_it() {
        let mut builder = SectionBuilder::new();
        builder
            .text("run", Colour::GOLD, Styles::NONE)
            .click(ClickEventType::SuggestCommand, "/old")
            .click(ClickEventType::RunCommand, "/new");
        let section = builder.build();
        let click = section.click.unwrap();
        assert_eq!(click.click_type, ClickEventType::RunCommand);
        assert_eq!(click.value, "/new");
    }

    #[test]
    fn test_message_builder_collects_sections_in_order() {
        let mut one = SectionBuilder::new();
        one.text("one", Colour::WHITE, Styles::NONE);
        let mut two = SectionBuilder::new();
        two.text("two", Colour::WHITE, Styles::NONE);

        let mut builder = MessageBuilder::new();
        builder.section(one.build()).section(two.build());
        let message = builder.build();

        assert_eq!(message.sections.len(), 2);
        assert_eq!(message.plain_text(), "onetwo");
    }
}
