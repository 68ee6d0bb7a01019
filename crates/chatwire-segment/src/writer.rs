//! The reconstitutor: part stream → wire text. Inverse of the tokenizer.

use crate::part::ChatMessagePart;
use crate::tag::Tag;

/// Writes a stream of parts back into one wire string.
///
/// Feed parts in order with [`part`](Reconstitutor::part), then take the
/// text with [`finish`](Reconstitutor::finish). `finish` consumes the
/// writer, so one instance produces exactly one string.
///
/// Re-escaping is canonical, not literal-preserving: reconstituting the
/// parts of a tokenized string yields text that retokenizes to the same
/// parts, not necessarily the same bytes.
#[derive(Debug, Default)]
pub struct Reconstitutor {
    out: String,
    any: bool,
}

impl Reconstitutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one part: delimiter (unless first), guarded escaped text,
    /// then hover, click, and insertion segments in that order.
    pub fn part(&mut self, part: &ChatMessagePart) {
        if self.any {
            self.out.push_str("||");
        }
        self.any = true;

        let escaped = escape_pipes(&part.text);
        // Text that would re-parse as a tagged or delimiter-led segment
        // needs the explicit plain-text tag in front.
        if escaped.starts_with("||") || Tag::classify(&escaped).is_some() {
            self.out.push_str(Tag::Nil.prefix());
        }
        self.out.push_str(&escaped);

        if let Some(hover) = &part.hover {
            self.out.push_str("||");
            self.out.push_str(Tag::Tooltip.prefix());
            self.out.push_str(&escape_pipes(hover));
        }
        if let Some(click) = &part.click {
            self.out.push_str("||");
            self.out.push_str(click.click_type.short_code());
            self.out.push(':');
            self.out.push_str(&escape_pipes(&click.value));
        }
        if let Some(insertion) = &part.insertion {
            self.out.push_str("||");
            self.out.push_str(Tag::Insert.prefix());
            self.out.push_str(&escape_pipes(insertion));
        }
    }

    /// The accumulated wire text.
    pub fn finish(self) -> String {
        self.out
    }
}

/// Reconstitutes a part slice in one call.
pub fn reconstitute(parts: &[ChatMessagePart]) -> String {
    let mut writer = Reconstitutor::new();
    for part in parts {
        writer.part(part);
    }
    writer.finish()
}

/// Doubles every adjacent pipe pair, scanning left to right. An unpaired
/// trailing pipe in an odd-length run stays single.
fn escape_pipes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '|' && chars.peek() == Some(&'|') {
            chars.next();
            out.push_str("||||");
        } else {
            out.push(c);
        }
    }
    out
}
