//! The segment tokenizer: wire string → ordered event stream.

use chatwire_message::{ClickEventInfo, ClickEventType};

use crate::error::SegmentError;
use crate::part::ChatMessagePart;
use crate::sink::{PartCollector, TokenSink};
use crate::tag::Tag;

/// Tokenizes one wire string into events pushed at a [`TokenSink`].
///
/// A tokenizer processes exactly one string exactly once: [`run`] consumes
/// `self`, so a second invocation does not compile. Construct a fresh
/// tokenizer per decode.
///
/// [`run`]: SegmentTokenizer::run
#[derive(Debug)]
pub struct SegmentTokenizer {
    input: String,
}

impl SegmentTokenizer {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Splits the input into segments, classifies each, and pushes the
    /// resulting events into `sink` in wire order.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::DanglingAction`] if a hover/click/insertion
    /// segment arrives before any plain-text segment. The sink never sees
    /// the orphaned event.
    pub fn run<S: TokenSink>(self, sink: &mut S) -> Result<(), SegmentError> {
        if self.input.is_empty() {
            return Ok(());
        }

        let mut open = false;
        for segment in split_segments(&self.input) {
            if segment.is_empty() {
                continue;
            }
            let tag = Tag::classify(&segment);
            match tag {
                None => {
                    // Unmatched or short prefix: plain text, unstripped.
                    sink.text(&segment);
                    open = true;
                }
                Some(Tag::Nil) => {
                    sink.text(Tag::Nil.strip(&segment));
                    open = true;
                }
                Some(tag) => {
                    if !open {
                        return Err(SegmentError::DanglingAction {
                            tag: tag.prefix(),
                        });
                    }
                    let value = tag.strip(&segment);
                    match tag {
                        Tag::Tooltip => sink.hover(value),
                        Tag::Command => sink.click(ClickEventInfo::new(
                            ClickEventType::RunCommand,
                            value,
                        )),
                        Tag::Suggest => sink.click(ClickEventInfo::new(
                            ClickEventType::SuggestCommand,
                            value,
                        )),
                        Tag::Url => sink.click(ClickEventInfo::new(
                            ClickEventType::OpenUrl,
                            value,
                        )),
                        Tag::Insert => sink.insertion(value),
                        // Handled above; plain text never reaches here.
                        Tag::Nil => {}
                    }
                }
            }
        }
        Ok(())
    }
}

/// Tokenizes `input` and collects the events into parts.
///
/// Convenience wrapper over [`SegmentTokenizer`] + [`PartCollector`].
///
/// # Errors
///
/// Propagates [`SegmentError::DanglingAction`] from the tokenizer.
pub fn tokenize(input: &str) -> Result<Vec<ChatMessagePart>, SegmentError> {
    let mut collector = PartCollector::new();
    SegmentTokenizer::new(input).run(&mut collector)?;
    Ok(collector.into_parts())
}

// ---------------------------------------------------------------------------
// Escape-aware splitting
// ---------------------------------------------------------------------------

/// Splits wire text on `||`, undoing the pipe-pair escaping.
///
/// First the naive split on every non-overlapping `||`. A maximal run of
/// `e` consecutive empty elements between two non-empty ones stands for
/// `d = e - e/2` literal `||` pairs; the parity of `e` decides where they
/// belong:
///
/// - odd `e`: the pipes glue the surrounding elements together
///   (`"a||||b"` → `["a", "", "b"]` → one segment `"a||b"`),
/// - even `e`: one of the pairs was a real delimiter, the rest open a new
///   segment (`"a||||||b"` → `["a", "", "", "b"]` → `"a"`, `"||b"`).
///
/// The rule behind both cases: a run of `m` wire pipe pairs is all escape
/// pairs when `m` is even, and one delimiter plus escapes when `m` is odd.
/// An interior run of `e` empties comes from `e + 1` pairs; a run touching
/// a string boundary comes from `e` pairs (the boundary contributes an
/// empty without a pair). Applying the same rule there means a lone
/// leading or trailing `||` is a delimiter whose empty segment is skipped,
/// while doubled boundary pipes stay literal — the only reading under
/// which re-escaping round-trips.
fn split_segments(input: &str) -> Vec<String> {
    let naive: Vec<&str> = input.split("||").collect();
    let mut segments: Vec<String> = Vec::new();
    let mut i = 0;

    while i < naive.len() {
        if !naive[i].is_empty() {
            segments.push(naive[i].to_owned());
            i += 1;
            continue;
        }

        let has_prev = i > 0;
        let mut e = 0;
        while i + e < naive.len() && naive[i + e].is_empty() {
            e += 1;
        }
        i += e;
        let has_next = i < naive.len();

        // How many wire pipe pairs this run stands for.
        let pairs = match (has_prev, has_next) {
            (true, true) => e + 1,
            (true, false) | (false, true) => e,
            (false, false) => e - 1,
        };
        let pipes = "||".repeat(pairs / 2);

        if has_prev && (pairs % 2 == 0 || !has_next) {
            // No delimiter in the run (or only a trailing one, whose empty
            // segment is skipped): the literal pipes glue backwards.
            if let Some(prev) = segments.last_mut() {
                prev.push_str(&pipes);
                if has_next {
                    prev.push_str(naive[i]);
                    i += 1;
                }
            }
        } else if has_next {
            // The literal pipes open a new segment in front of the next
            // element; an odd run's delimiter separated only a skipped
            // empty segment.
            let mut segment = pipes;
            segment.push_str(naive[i]);
            i += 1;
            segments.push(segment);
        } else if !pipes.is_empty() {
            // The whole input was pipes.
            segments.push(pipes);
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // split_segments
    // =====================================================================

    #[test]
    fn test_plain_delimiter_splits() {
        assert_eq!(split_segments("a||b"), vec!["a", "b"]);
    }

    #[test]
    fn test_escaped_pair_glues() {
        assert_eq!(split_segments("a||||b"), vec!["a||b"]);
    }

    #[test]
    fn test_delimiter_then_escaped_pair_opens_segment() {
        assert_eq!(split_segments("a||||||b"), vec!["a", "||b"]);
    }

    #[test]
    fn test_consecutive_glues_chain() {
        assert_eq!(split_segments("a||||b||||c"), vec!["a||b||c"]);
    }

    #[test]
    fn test_trailing_escaped_pair_glues() {
        assert_eq!(split_segments("a||||"), vec!["a||"]);
    }

    #[test]
    fn test_leading_pipes_open_a_segment() {
        assert_eq!(split_segments("||||a"), vec!["||a"]);
    }

    #[test]
    fn test_lone_boundary_delimiter_separates_skipped_empty() {
        assert_eq!(split_segments("a||"), vec!["a"]);
        assert_eq!(split_segments("||a"), vec!["a"]);
        assert_eq!(split_segments("a||b||"), vec!["a", "b"]);
    }

    #[test]
    fn test_pipes_only_input() {
        // "||" is one delimiter between two skipped empties; "||||" is one
        // escaped literal pair.
        assert!(split_segments("||").is_empty());
        assert_eq!(split_segments("||||"), vec!["||"]);
    }

    #[test]
    fn test_single_pipe_is_ordinary_text() {
        assert_eq!(split_segments("a|b"), vec!["a|b"]);
        assert_eq!(split_segments("a|||b"), vec!["a", "|b"]);
    }

    // =====================================================================
    // Tokenizer dispatch
    // =====================================================================

    #[test]
    fn test_tag_events_attach_to_preceding_part() {
        let parts = tokenize("Hello||ttp:hi||cmd:/help||ins:word").unwrap();
        assert_eq!(parts.len(), 1);
        let part = &parts[0];
        assert_eq!(part.text, "Hello");
        assert_eq!(part.hover.as_deref(), Some("hi"));
        let click = part.click.as_ref().unwrap();
        assert_eq!(click.click_type, ClickEventType::RunCommand);
        assert_eq!(click.value, "/help");
        assert_eq!(part.insertion.as_deref(), Some("word"));
    }

    #[test]
    fn test_each_text_segment_opens_a_new_part() {
        let parts = tokenize("one||ttp:a||two||ttp:b").unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].hover.as_deref(), Some("a"));
        assert_eq!(parts[1].hover.as_deref(), Some("b"));
    }

    #[test]
    fn test_nil_tag_is_stripped() {
        let parts = tokenize("nil:cmd:not a command").unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].text, "cmd:not a command");
        assert!(parts[0].click.is_none());
    }

    #[test]
    fn test_unmatched_prefix_is_kept_unstripped() {
        let parts = tokenize("abc:hello").unwrap();
        assert_eq!(parts[0].text, "abc:hello");
    }

    #[test]
    fn test_suggest_and_url_click_types() {
        let parts = tokenize("x||sgt:/msg ||y||url:https://example.com")
            .unwrap();
        assert_eq!(
            parts[0].click.as_ref().unwrap().click_type,
            ClickEventType::SuggestCommand
        );
        assert_eq!(parts[0].click.as_ref().unwrap().value, "/msg ");
        assert_eq!(
            parts[1].click.as_ref().unwrap().click_type,
            ClickEventType::OpenUrl
        );
    }

    #[test]
    fn test_tags_match_case_insensitively() {
        let parts = tokenize("x||TTP:tip").unwrap();
        assert_eq!(parts[0].hover.as_deref(), Some("tip"));
    }

    #[test]
    fn test_empty_input_yields_no_parts() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_dangling_action_is_an_error() {
        let err = tokenize("ttp:orphan").unwrap_err();
        assert!(matches!(
            err,
            SegmentError::DanglingAction { tag: "ttp:" }
        ));
    }

    #[test]
    fn test_dangling_click_after_only_delimiters() {
        let err = tokenize("||cmd:/x").unwrap_err();
        assert!(matches!(err, SegmentError::DanglingAction { .. }));
    }

    #[test]
    fn test_escaped_tag_stays_inside_text() {
        // Four pipes escape to a literal pair, so `ttp:` is text here.
        let parts = tokenize("a||||ttp:x").unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].text, "a||ttp:x");
        assert_eq!(parts[0].hover, None);
    }
}
