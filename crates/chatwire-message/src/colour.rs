//! Colour and style primitives.
//!
//! Both types are newtypes over small integers so they serialize as plain
//! numbers and stay `Copy`. The legacy code tables (hex digit → colour,
//! letter → style) live here next to the data they describe; the scanner
//! in `chatwire-format` drives them but never owns them.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Colour
// ---------------------------------------------------------------------------

/// A 24-bit RGB text colour.
///
/// The reset colour is [`Colour::WHITE`] (`0xFFFFFF`); a finished component
/// always carries a fully resolved colour. The sixteen named constants are
/// the classic palette addressable by a single legacy hex digit — any other
/// value is only reachable through a hex colour literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Colour(pub u32);

impl Colour {
    pub const BLACK: Colour = Colour(0x000000);
    pub const DARK_BLUE: Colour = Colour(0x0000AA);
    pub const DARK_GREEN: Colour = Colour(0x00AA00);
    pub const DARK_AQUA: Colour = Colour(0x00AAAA);
    pub const DARK_RED: Colour = Colour(0xAA0000);
    pub const DARK_PURPLE: Colour = Colour(0xAA00AA);
    pub const GOLD: Colour = Colour(0xFFAA00);
    pub const GRAY: Colour = Colour(0xAAAAAA);
    pub const DARK_GRAY: Colour = Colour(0x555555);
    pub const BLUE: Colour = Colour(0x5555FF);
    pub const GREEN: Colour = Colour(0x55FF55);
    pub const AQUA: Colour = Colour(0x55FFFF);
    pub const RED: Colour = Colour(0xFF5555);
    pub const LIGHT_PURPLE: Colour = Colour(0xFF55FF);
    pub const YELLOW: Colour = Colour(0xFFFF55);
    pub const WHITE: Colour = Colour(0xFFFFFF);

    /// The legacy palette in code order: `&0` through `&f`.
    const PALETTE: [(char, Colour); 16] = [
        ('0', Colour::BLACK),
        ('1', Colour::DARK_BLUE),
        ('2', Colour::DARK_GREEN),
        ('3', Colour::DARK_AQUA),
        ('4', Colour::DARK_RED),
        ('5', Colour::DARK_PURPLE),
        ('6', Colour::GOLD),
        ('7', Colour::GRAY),
        ('8', Colour::DARK_GRAY),
        ('9', Colour::BLUE),
        ('a', Colour::GREEN),
        ('b', Colour::AQUA),
        ('c', Colour::RED),
        ('d', Colour::LIGHT_PURPLE),
        ('e', Colour::YELLOW),
        ('f', Colour::WHITE),
    ];

    /// Looks up the palette colour for a legacy hex digit, case-insensitively.
    ///
    /// Returns `None` for anything that is not `0`-`9` / `a`-`f`.
    pub fn from_code(code: char) -> Option<Colour> {
        let code = code.to_ascii_lowercase();
        Colour::PALETTE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, colour)| *colour)
    }

    /// The legacy code for this colour, if it is one of the sixteen palette
    /// entries. Non-palette colours have no single-digit code and render as
    /// hex literals instead.
    pub fn code(self) -> Option<char> {
        Colour::PALETTE
            .iter()
            .find(|(_, colour)| *colour == self)
            .map(|(c, _)| *c)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

/// A bitmask over the five inline text styles.
///
/// Styles accumulate: applying a style code ORs its bit into the mask.
/// Colour changes and resets clear the whole mask — that rule lives in the
/// scanner, but it is why this type is a mask and not five booleans.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Styles(pub u8);

impl Styles {
    pub const NONE: Styles = Styles(0);
    /// Obfuscated, rapidly cycling characters (`&k`).
    pub const MAGIC: Styles = Styles(1 << 0);
    pub const BOLD: Styles = Styles(1 << 1);
    pub const STRIKETHROUGH: Styles = Styles(1 << 2);
    pub const UNDERLINE: Styles = Styles(1 << 3);
    pub const ITALIC: Styles = Styles(1 << 4);

    /// Legacy code letters in canonical emission order.
    const CODES: [(char, Styles); 5] = [
        ('k', Styles::MAGIC),
        ('l', Styles::BOLD),
        ('m', Styles::STRIKETHROUGH),
        ('n', Styles::UNDERLINE),
        ('o', Styles::ITALIC),
    ];

    /// Looks up the style for a legacy letter, case-insensitively.
    ///
    /// Returns `None` for anything outside `k`/`l`/`m`/`n`/`o` — including
    /// `r`, which is a reset, not a style.
    pub fn from_code(code: char) -> Option<Styles> {
        let code = code.to_ascii_lowercase();
        Styles::CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, style)| *style)
    }

    /// `true` if every bit of `other` is set in `self`.
    pub fn contains(self, other: Styles) -> bool {
        self.0 & other.0 == other.0
    }

    /// ORs the bits of `other` into `self`.
    pub fn insert(&mut self, other: Styles) {
        self.0 |= other.0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The legacy code letters for every style set in this mask, in
    /// canonical order. Drives the renderer's style emission.
    pub fn code_chars(self) -> impl Iterator<Item = char> {
        Styles::CODES
            .into_iter()
            .filter(move |(_, style)| self.contains(*style))
            .map(|(c, _)| c)
    }
}

impl BitOr for Styles {
    type Output = Styles;

    fn bitor(self, rhs: Styles) -> Styles {
        Styles(self.0 | rhs.0)
    }
}

impl BitOrAssign for Styles {
    fn bitor_assign(&mut self, rhs: Styles) {
        self.0 |= rhs.0;
    }
}
