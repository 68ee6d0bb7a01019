//! The segment layer of the wire format: one message string, `||`-delimited
//! segments, 4-character tags.
//!
//! This crate is colour-agnostic. It deals in [`ChatMessagePart`]s — plain
//! text plus raw action strings — and leaves colour/style resolution to
//! `chatwire-format`. The two directions:
//!
//! - **Decoding**: [`SegmentTokenizer`] consumes a wire string once and
//!   pushes plain-text / hover / click / insertion events into a
//!   [`TokenSink`]. [`PartCollector`] is the sink that assembles parts;
//!   platform adapters can bring their own.
//! - **Encoding**: [`Reconstitutor`] consumes a part stream and writes the
//!   wire string back, re-escaping pipes and guarding against text that
//!   would re-parse as a tag.
//!
//! # Wire format
//!
//! ```text
//! Hello ||ttp:a tooltip||cmd:/help||ins:Hello || more text
//! └─────┘ └───────────┘ └───────┘ └────────┘ └──────────┘
//!  text      hover        click    insertion   next part
//! ```
//!
//! A literal `||` inside segment text is escaped by doubling (`||||`).
//! Both tokenizer and reconstitutor are single-use values consumed by move;
//! reusing one across runs is a compile error, not a runtime surprise.

mod error;
mod part;
mod sink;
mod tag;
mod tokenizer;
mod writer;

pub use error::SegmentError;
pub use part::ChatMessagePart;
pub use sink::{PartCollector, TokenSink};
pub use tokenizer::{tokenize, SegmentTokenizer};
pub use writer::{reconstitute, Reconstitutor};
