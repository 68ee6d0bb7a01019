//! Integration tests for pipe escaping: the parity formula and the
//! tokenize/reconstitute inverse guarantee.

use chatwire_segment::{reconstitute, tokenize, ChatMessagePart};

fn texts(parts: &[ChatMessagePart]) -> Vec<&str> {
    parts.iter().map(|p| p.text.as_str()).collect()
}

// =========================================================================
// The parity formula, d = e - floor(e/2), for interior runs e = 1..5.
// =========================================================================

#[test]
fn test_interior_empty_runs_follow_parity_formula() {
    // e empties between "a" and "b" in the naive split arise from
    // 2*(e+1) consecutive pipes. Odd e glues, even e opens a new segment;
    // d = e - e/2 literal pairs survive either way.
    let cases: [(&str, Vec<&str>); 5] = [
        // e = 1: 4 pipes, d = 1, glued.
        ("a||||b", vec!["a||b"]),
        // e = 2: 6 pipes, d = 1, new segment.
        ("a||||||b", vec!["a", "||b"]),
        // e = 3: 8 pipes, d = 2, glued.
        ("a||||||||b", vec!["a||||b"]),
        // e = 4: 10 pipes, d = 2, new segment.
        ("a||||||||||b", vec!["a", "||||b"]),
        // e = 5: 12 pipes, d = 3, glued.
        ("a||||||||||||b", vec!["a||||||b"]),
    ];
    for (wire, expected) in cases {
        let parts = tokenize(wire).unwrap();
        assert_eq!(texts(&parts), expected, "wire: {wire}");
    }
}

#[test]
fn test_single_escaped_pair_against_single_delimiter() {
    let escaped = tokenize("a||||b").unwrap();
    assert_eq!(texts(&escaped), vec!["a||b"]);

    let delimited = tokenize("a||b").unwrap();
    assert_eq!(texts(&delimited), vec!["a", "b"]);
}

// =========================================================================
// tokenize(reconstitute(tokenize(s))) == tokenize(s)
// =========================================================================

#[test]
fn test_tokenize_reconstitute_is_idempotent() {
    let inputs = [
        "plain",
        "a||b",
        "a||||b",
        "a||||||b",
        "a|||b",
        "a|b|c",
        "a||",
        "a||||",
        "||a",
        "||||a",
        "||||",
        "Hello ||ttp:a tip||cmd:/help||ins:word|| tail",
        "nil:cmd:not a command",
        "x||ttp:a||||b",
        "weird |||| run ||| of pipes |",
        "abc:unmatched tag",
    ];
    for input in inputs {
        let once = tokenize(input).unwrap();
        let wire = reconstitute(&once);
        let twice = tokenize(&wire).unwrap();
        assert_eq!(once, twice, "input: {input:?}, re-wire: {wire:?}");
    }
}

#[test]
fn test_reconstituted_wire_is_canonical() {
    // Re-escaping is canonical, not byte-preserving: a lone trailing
    // delimiter disappears because its empty segment carries nothing.
    let parts = tokenize("a||").unwrap();
    assert_eq!(reconstitute(&parts), "a");
}

// =========================================================================
// Self-escaping round-trips
// =========================================================================

#[test]
fn test_tag_lookalike_round_trips_as_text() {
    let parts = vec![ChatMessagePart::new("cmd:foo")];
    let wire = reconstitute(&parts);
    assert_eq!(wire, "nil:cmd:foo");
    assert_eq!(tokenize(&wire).unwrap(), parts);
}

#[test]
fn test_pipe_heavy_part_round_trips() {
    let parts = vec![
        ChatMessagePart::new("||starts with pipes"),
        ChatMessagePart::new("ends with pipes||"),
    ];
    let wire = reconstitute(&parts);
    assert_eq!(tokenize(&wire).unwrap(), parts);
}

#[test]
fn test_full_part_round_trips_with_pipes_in_every_field() {
    use chatwire_message::{ClickEventInfo, ClickEventType};

    let parts = vec![ChatMessagePart {
        text: "see || here".into(),
        hover: Some("tool||tip".into()),
        click: Some(ClickEventInfo::new(
            ClickEventType::OpenUrl,
            "https://example.com/a||b",
        )),
        insertion: Some("ins||ert".into()),
    }];
    let wire = reconstitute(&parts);
    assert_eq!(tokenize(&wire).unwrap(), parts);
}
