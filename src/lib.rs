//! Arkora - Canonical Board Name Resolution
//!
//! Resolves free-text topic names into canonical, deduplicated board slugs
//! for the Arkora message board. Input is normalized into a URL-safe slug,
//! redirected through a synonym table, matched exactly or fuzzily against the
//! existing boards, and otherwise accepted as a brand-new board.

pub mod boards;
pub mod config;
pub mod distance;
pub mod resolver;
pub mod slug;
pub mod synonyms;

pub use boards::label;
pub use config::Config;
pub use distance::levenshtein;
pub use resolver::{BoardResolver, Resolution, Resolved, resolve, resolve_detailed};
pub use slug::{FALLBACK_SLUG, MAX_SLUG_LEN, normalize};
