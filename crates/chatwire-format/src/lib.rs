//! Inline formatting codes: scanning text into styled runs and rendering
//! styled runs back into text.
//!
//! Two code families exist on the wire:
//!
//! - **Legacy**: `&` followed by one hex digit (a palette colour) or one of
//!   the letters `k`/`l`/`m`/`n`/`o` (a style) or `r` (reset). Two
//!   characters, case-insensitive.
//! - **Hex literal**: `<#` + exactly 3 or exactly 6 hex digits + `>`. The
//!   3-digit form expands by nibble duplication (`4BC` → `44BBCC`).
//!
//! [`scan`] walks a text span with a cumulative `(colour, styles)` state and
//! cuts a [`ChatComponent`](chatwire_message::ChatComponent) at every code
//! boundary. [`render`] is its inverse: it re-emits codes so that scanning
//! the output reproduces the component sequence.
//!
//! Which families a scan recognizes is a closed choice, [`CodeFamily`]: the
//! `All` variant is the legacy recognizer with the hex-literal recognizer
//! layered in front of it, not a separate implementation.

mod code;
mod render;
mod scanner;

pub use render::render;
pub use scanner::{scan, CodeFamily, ScanState};
