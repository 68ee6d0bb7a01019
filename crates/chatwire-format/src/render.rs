//! The renderer: styled runs → text with inline codes.
//!
//! Inverse of [`scan`](crate::scan): scanning the rendered text with the
//! same family and a default start state reproduces the component sequence
//! (empty components are skipped — they would scan into nothing).

use chatwire_message::{ChatComponent, Colour, Styles};

use crate::scanner::{CodeFamily, ScanState};

/// Renders a component sequence into inline-coded text.
///
/// State tracking starts at white/no-styles, the same state every scan
/// starts from. Between two components whose states are identical a
/// redundant code sequence is emitted on purpose: without it the scanner
/// would merge the two runs into one and the component boundary would be
/// lost.
///
/// Under [`CodeFamily::Legacy`] a colour outside the sixteen-entry palette
/// has no representation; when a state change forces a code there, `&r` is
/// emitted instead and the run decodes as white. That lossiness sits outside
/// the round-trip contract, which only covers output produced from
/// palette-representable input.
pub fn render(components: &[ChatComponent], family: CodeFamily) -> String {
    let mut out = String::new();
    let mut state = ScanState::default();
    let mut emitted_any = false;

    for component in components.iter().filter(|c| !c.is_empty()) {
        let same_state = component.colour == state.colour
            && component.styles == state.styles;
        // Styles only accumulate; shedding a bit requires a colour re-emit.
        let needs_clear = !component.styles.contains(state.styles);
        let boundary_only = emitted_any && same_state;

        if component.colour != state.colour || needs_clear || boundary_only {
            state.colour = emit_colour(&mut out, component.colour, family);
            state.styles = Styles::NONE;
        }
        for code in component.styles.code_chars() {
            // Skip bits already active; the rest are ORed in one by one.
            if let Some(style) = Styles::from_code(code) {
                if state.styles.contains(style) {
                    continue;
                }
                state.styles.insert(style);
            }
            out.push('&');
            out.push(code);
        }
        out.push_str(&component.text);
        emitted_any = true;
    }
    out
}

/// Emits the code establishing `colour` and returns the colour actually
/// established (differs only in the legacy non-palette fallback).
fn emit_colour(out: &mut String, colour: Colour, family: CodeFamily) -> Colour {
    if let Some(code) = colour.code() {
        out.push('&');
        out.push(code);
        return colour;
    }
    match family {
        CodeFamily::All => {
            out.push_str(&format!("<#{:06X}>", colour.0));
            colour
        }
        CodeFamily::Legacy => {
            out.push_str("&r");
            Colour::WHITE
        }
    }
}
