//! Built-in synonym table for board names.
//!
//! Groups near-synonymous topic words under a single canonical board so that
//! "stocks", "investing", and "finance" all land on `markets` instead of
//! spawning three near-duplicate boards. The table is keyed by normalized
//! slugs and is immutable for the process lifetime.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::slug::FALLBACK_SLUG;

lazy_static! {
    static ref SYNONYMS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();

        // markets
        for alias in [
            "stocks",
            "stock",
            "stock-market",
            "stockmarket",
            "investing",
            "invest",
            "finance",
            "trading",
            "stonks",
        ] {
            m.insert(alias, "markets");
        }

        // worldchain
        for alias in [
            "crypto",
            "cryptocurrency",
            "bitcoin",
            "btc",
            "eth",
            "ethereum",
            "web3",
            "blockchain",
            "defi",
            "wld",
        ] {
            m.insert(alias, "worldchain");
        }

        // confessions
        for alias in ["confession", "anonymous", "anon", "secrets", "secret"] {
            m.insert(alias, "confessions");
        }

        // the default board catches catch-all topics
        for alias in ["general", "news", "random", "misc", "main", "home", "all"] {
            m.insert(alias, FALLBACK_SLUG);
        }

        // tech
        for alias in ["technology", "programming", "coding", "software", "dev"] {
            m.insert(alias, "tech");
        }

        // gaming
        for alias in ["games", "game", "videogames", "video-games"] {
            m.insert(alias, "gaming");
        }

        // memes
        for alias in ["meme", "funny", "humor", "jokes", "shitposting"] {
            m.insert(alias, "memes");
        }

        // sports
        for alias in ["sport", "football", "soccer", "basketball"] {
            m.insert(alias, "sports");
        }

        // relationships
        for alias in ["dating", "love", "relationship", "advice"] {
            m.insert(alias, "relationships");
        }

        m
    };
}

/// Look up the canonical board for an alternate-term slug.
///
/// Exact match over already-normalized slugs; returns `None` for anything not
/// in the table verbatim. Canonical targets themselves are not keys, so e.g.
/// `lookup("markets")` is `None`.
pub fn lookup(slug: &str) -> Option<&'static str> {
    SYNONYMS.get(slug).copied()
}

/// Iterate the built-in table as `(alias, canonical)` pairs.
///
/// Iteration order is unspecified; callers that display the table sort it.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    SYNONYMS.iter().map(|(&alias, &canonical)| (alias, canonical))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_aliases() {
        assert_eq!(lookup("stocks"), Some("markets"));
        assert_eq!(lookup("investing"), Some("markets"));
        assert_eq!(lookup("finance"), Some("markets"));
        assert_eq!(lookup("crypto"), Some("worldchain"));
        assert_eq!(lookup("bitcoin"), Some("worldchain"));
        assert_eq!(lookup("web3"), Some("worldchain"));
        assert_eq!(lookup("confession"), Some("confessions"));
        assert_eq!(lookup("anonymous"), Some("confessions"));
        assert_eq!(lookup("general"), Some(FALLBACK_SLUG));
        assert_eq!(lookup("news"), Some(FALLBACK_SLUG));
        assert_eq!(lookup("random"), Some(FALLBACK_SLUG));
    }

    #[test]
    fn test_lookup_misses() {
        assert_eq!(lookup("markets"), None);
        assert_eq!(lookup("underwater-basket-weaving"), None);
        // Case-sensitive: only normalized slugs are keys.
        assert_eq!(lookup("Stocks"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_table_is_normalized() {
        for (alias, canonical) in entries() {
            assert!(crate::slug::is_normalized(alias), "alias {alias:?}");
            assert!(crate::slug::is_normalized(canonical), "target {canonical:?}");
            // A key that is also a target would shadow its own family.
            assert_eq!(lookup(canonical), None, "target {canonical:?} is a key");
        }
    }
}
