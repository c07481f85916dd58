//! Board name resolution.
//!
//! Orchestrates the normalizer, synonym table, and edit-distance matcher into
//! a single canonical-slug decision. Resolution is a pure function of the
//! input text and the caller-supplied snapshot of existing board slugs; it
//! performs no I/O and never fails.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::boards;
use crate::config::Config;
use crate::distance::levenshtein;
use crate::slug::{FALLBACK_SLUG, normalize};
use crate::synonyms;

/// Maximum edit distance at which an input is treated as a typo of an
/// existing board rather than a new board.
pub const MAX_TYPO_DISTANCE: usize = 2;

/// How a slug was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "via", rename_all = "kebab-case")]
pub enum Resolution {
    /// The normalized input is a known alternate term for a canonical board.
    Synonym,
    /// The normalized input matched an existing board verbatim.
    Exact,
    /// The normalized input was within typo distance of an existing board.
    Fuzzy { distance: usize },
    /// No match anywhere; the slug identifies a board that does not exist yet.
    New,
}

/// Outcome of a resolution: the canonical slug plus how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub slug: String,
    #[serde(flatten)]
    pub resolution: Resolution,
}

/// Resolve free-text input to a canonical board slug.
///
/// Uses the built-in synonym table. For the resolution kind as well, see
/// [`resolve_detailed`]; for config-extended tables, see [`BoardResolver`].
pub fn resolve<S: AsRef<str>>(input: &str, existing: &[S]) -> String {
    resolve_detailed(input, existing).slug
}

/// Resolve free-text input and report how the decision was made.
pub fn resolve_detailed<S: AsRef<str>>(input: &str, existing: &[S]) -> Resolved {
    BoardResolver::default().resolve_detailed(input, existing)
}

/// A resolver carrying the built-in synonym table and featured labels, plus
/// any overrides supplied through an `arkora.toml`.
///
/// Built once at startup and immutable afterwards. `BoardResolver::default()`
/// behaves identically to the free functions in this module.
#[derive(Debug, Default)]
pub struct BoardResolver {
    /// Extra alias -> canonical entries; consulted before the built-in table
    /// so a deployment can shadow a built-in redirect.
    extra_synonyms: HashMap<String, String>,
    /// Extra slug -> display-label entries; consulted before the featured list.
    extra_labels: HashMap<String, String>,
}

impl BoardResolver {
    /// Resolver with the built-in tables only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver extended with the synonym and label overrides from `config`.
    ///
    /// The config is expected to be validated (see [`Config::validate`]);
    /// entries are taken as-is.
    pub fn with_config(config: &Config) -> Self {
        Self {
            extra_synonyms: config.synonyms.clone(),
            extra_labels: config.boards.clone(),
        }
    }

    /// Canonical board for an alternate-term slug, if any.
    pub fn synonym(&self, slug: &str) -> Option<&str> {
        if let Some(canonical) = self.extra_synonyms.get(slug) {
            return Some(canonical);
        }
        synonyms::lookup(slug)
    }

    /// Display name for a board slug.
    pub fn label(&self, slug: &str) -> String {
        if let Some(name) = self.extra_labels.get(slug) {
            return name.clone();
        }
        boards::label(slug)
    }

    /// The effective synonym table, sorted by alias, overrides applied.
    pub fn synonym_entries(&self) -> Vec<(String, String)> {
        let mut merged: HashMap<String, String> = synonyms::entries()
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
            .collect();
        for (alias, canonical) in &self.extra_synonyms {
            merged.insert(alias.clone(), canonical.clone());
        }
        let mut entries: Vec<_> = merged.into_iter().collect();
        entries.sort();
        entries
    }

    /// Resolve free-text input to a canonical board slug.
    pub fn resolve<S: AsRef<str>>(&self, input: &str, existing: &[S]) -> String {
        self.resolve_detailed(input, existing).slug
    }

    /// Resolve free-text input, reporting how the decision was made.
    ///
    /// Strict order, first match wins:
    /// 1. normalize the input (total, never empty);
    /// 2. synonym redirect — wins even over an identical existing slug, since
    ///    the redirect target is itself a canonical board;
    /// 3. verbatim match against `existing`;
    /// 4. closest existing slug within edit distance [`MAX_TYPO_DISTANCE`],
    ///    ties broken by first occurrence in `existing`;
    /// 5. the normalized slug itself, denoting a new board.
    pub fn resolve_detailed<S: AsRef<str>>(&self, input: &str, existing: &[S]) -> Resolved {
        let slug = normalize(input);
        if slug.is_empty() {
            // normalize guarantees non-empty; kept as a terminal backstop.
            return Resolved {
                slug: FALLBACK_SLUG.to_string(),
                resolution: Resolution::New,
            };
        }

        if let Some(canonical) = self.synonym(&slug) {
            debug!(input, slug = %slug, canonical, "synonym redirect");
            return Resolved {
                slug: canonical.to_string(),
                resolution: Resolution::Synonym,
            };
        }

        if existing.iter().any(|s| s.as_ref() == slug) {
            return Resolved {
                slug,
                resolution: Resolution::Exact,
            };
        }

        let mut best: Option<(&str, usize)> = None;
        for candidate in existing {
            let candidate = candidate.as_ref();
            let d = levenshtein(&slug, candidate);
            // Strict < keeps the first of equidistant candidates.
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((candidate, d));
            }
        }

        if let Some((candidate, d)) = best
            && d <= MAX_TYPO_DISTANCE
        {
            debug!(input, slug = %slug, candidate, distance = d, "fuzzy match");
            return Resolved {
                slug: candidate.to_string(),
                resolution: Resolution::Fuzzy { distance: d },
            };
        }

        debug!(input, slug = %slug, "new board");
        Resolved {
            slug,
            resolution: Resolution::New,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing(slugs: &[&str]) -> Vec<String> {
        slugs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_synonym_precedence_over_existing() {
        // Synonym lookup happens before any existing-slug check.
        assert_eq!(resolve("stocks", &existing(&[])), "markets");
        // Even when the literal alias exists as a board.
        assert_eq!(resolve("stocks", &existing(&["stocks"])), "markets");
        let r = resolve_detailed("Crypto", &existing(&["crypto"]));
        assert_eq!(r.slug, "worldchain");
        assert_eq!(r.resolution, Resolution::Synonym);
    }

    #[test]
    fn test_exact_match_wins_over_fuzzy() {
        let boards = existing(&["markets", "market"]);
        let r = resolve_detailed("markets", &boards);
        assert_eq!(r.slug, "markets");
        assert_eq!(r.resolution, Resolution::Exact);
    }

    #[test]
    fn test_typo_tolerance_bound() {
        let boards = existing(&["politics"]);
        let r = resolve_detailed("politcs", &boards);
        assert_eq!(r.slug, "politics");
        assert_eq!(r.resolution, Resolution::Fuzzy { distance: 1 });

        // Distance > 2 falls through to a new board.
        let r = resolve_detailed("xyzxyz", &boards);
        assert_eq!(r.slug, "xyzxyz");
        assert_eq!(r.resolution, Resolution::New);
    }

    #[test]
    fn test_new_board_creation() {
        let r = resolve_detailed("underwater-basket-weaving", &existing(&[]));
        assert_eq!(r.slug, "underwater-basket-weaving");
        assert_eq!(r.resolution, Resolution::New);
    }

    #[test]
    fn test_fuzzy_tie_breaks_on_first_occurrence() {
        // "poetr" is distance 1 from both candidates; whichever the caller
        // lists first wins. The snapshot order is the caller's concern.
        assert_eq!(crate::distance::levenshtein("poetr", "poet"), 1);
        assert_eq!(crate::distance::levenshtein("poetr", "poetry"), 1);
        let boards = existing(&["poet", "poetry"]);
        assert_eq!(resolve("poetr", &boards), "poet");
        let boards = existing(&["poetry", "poet"]);
        assert_eq!(resolve("poetr", &boards), "poetry");
    }

    #[test]
    fn test_garbage_input_falls_back() {
        let r = resolve_detailed("@@@", &existing(&["markets"]));
        // "@@@" normalizes to the fallback board, which is not in the
        // existing list here and more than 2 edits from "markets".
        assert_eq!(r.slug, crate::slug::FALLBACK_SLUG);
        assert_eq!(r.resolution, Resolution::New);
    }

    #[test]
    fn test_resolver_config_overrides() {
        let mut config = Config::default();
        config
            .synonyms
            .insert("poker".to_string(), "gambling".to_string());
        // Shadow a built-in redirect.
        config
            .synonyms
            .insert("news".to_string(), "world-news".to_string());
        config
            .boards
            .insert("gambling".to_string(), "High Stakes".to_string());

        let resolver = BoardResolver::with_config(&config);
        assert_eq!(resolver.resolve("Poker", &existing(&[])), "gambling");
        assert_eq!(resolver.resolve("news", &existing(&[])), "world-news");
        assert_eq!(resolver.label("gambling"), "High Stakes");
        // Built-ins still apply where not shadowed.
        assert_eq!(resolver.resolve("stocks", &existing(&[])), "markets");
        assert_eq!(resolver.label("markets"), "Markets");
    }

    #[test]
    fn test_resolved_serializes_flat() {
        let r = resolve_detailed("politcs", &existing(&["politics"]));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["slug"], "politics");
        assert_eq!(json["via"], "fuzzy");
        assert_eq!(json["distance"], 1);

        let r = resolve_detailed("stocks", &existing(&[]));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["via"], "synonym");
    }
}
