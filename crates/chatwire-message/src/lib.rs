//! Canonical chat message model for chatwire.
//!
//! This crate defines the immutable value types that every other layer
//! produces or consumes:
//!
//! - **Appearance** ([`Colour`], [`Styles`]) — a 24-bit RGB colour and a
//!   bitmask over the five inline text styles.
//! - **Structure** ([`ChatComponent`], [`Section`], [`SendableMessage`]) —
//!   a message is an ordered list of sections; a section is an ordered list
//!   of styled text runs plus at most one hover, click, and insertion action.
//! - **Actions** ([`ClickEventType`], [`ClickEventInfo`]) — what happens when
//!   a reader clicks a section.
//! - **Builders** ([`SectionBuilder`], [`MessageBuilder`]) — the mutable,
//!   thread-confined way to assemble the immutable values above.
//!
//! All values here are plain data: no I/O, no platform types. Scanning wire
//! text into components and writing components back out live in the sibling
//! `chatwire-format` and `chatwire-segment` crates.

mod builder;
mod colour;
mod types;

pub use builder::{MessageBuilder, SectionBuilder};
pub use colour::{Colour, Styles};
pub use types::{
    ChatComponent, ClickEventInfo, ClickEventType, Section, SendableMessage,
};
