//! Segment tags: the 4-character prefixes that classify a segment's role.

/// A segment's role, identified by its first four characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
    /// Plain text; the tag only exists to protect text that would otherwise
    /// re-parse as something else.
    Nil,
    /// Hover tooltip for the open part.
    Tooltip,
    /// Click action: run the value as a command.
    Command,
    /// Click action: suggest the value in the input box.
    Suggest,
    /// Click action: open the value as a URL.
    Url,
    /// Insertion action for the open part.
    Insert,
}

impl Tag {
    const ALL: [Tag; 6] = [
        Tag::Nil,
        Tag::Tooltip,
        Tag::Command,
        Tag::Suggest,
        Tag::Url,
        Tag::Insert,
    ];

    /// The literal wire prefix, lowercase.
    pub(crate) fn prefix(self) -> &'static str {
        match self {
            Tag::Nil => "nil:",
            Tag::Tooltip => "ttp:",
            Tag::Command => "cmd:",
            Tag::Suggest => "sgt:",
            Tag::Url => "url:",
            Tag::Insert => "ins:",
        }
    }

    /// Classifies a segment by its first four characters, case-insensitively.
    ///
    /// Segments shorter than four characters, or with an unknown prefix,
    /// are plain text and return `None`.
    pub(crate) fn classify(segment: &str) -> Option<Tag> {
        let head = segment.as_bytes().get(..4)?;
        Tag::ALL
            .into_iter()
            .find(|tag| head.eq_ignore_ascii_case(tag.prefix().as_bytes()))
    }

    /// The segment with its tag stripped. Only valid on a classified
    /// segment: the four prefix bytes are known ASCII.
    pub(crate) fn strip(self, segment: &str) -> &str {
        &segment[4..]
    }
}
