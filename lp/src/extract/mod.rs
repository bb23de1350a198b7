//! Extraction pipeline: generated text to a structured lesson plan
//!
//! Generated text is treated as a sequence of `Heading: content` spans.
//! Layers, leaves first:
//! 1. [`extract_section`] - one heading's span
//! 2. [`extract_nested`] - a heading inside a parent span
//! 3. [`parse_bullets`] - list items in a span
//! 4. [`assemble`] - alias chains per record field
//!
//! Nothing here fails: a heading that cannot be found falls through its alias
//! chain to an empty value.

mod assemble;
mod bullets;
mod section;

pub use assemble::{Candidate, aliases, assemble, first_present};
pub use bullets::parse_bullets;
pub use section::{KNOWN_HEADINGS, extract_nested, extract_section};
