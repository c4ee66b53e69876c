//! The two-tier identifier lookup table.

use std::collections::HashMap;
use std::fmt;

use crate::MappingEntry;

/// Which fallback tier produced a resolution.
///
/// Raw ids are sometimes stored with punctuation stripped or in a shortened
/// numeric form, so [`MappingIndex::resolve`] walks a fixed candidate chain
/// instead of requiring the mapping table to enumerate every historical id
/// variant. The tier is reported as a diagnostic only; it never changes
/// which candidate wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolveTier {
    /// The token matched the exact index as-is.
    Exact,
    /// The digits-only form of the token matched.
    Digits,
    /// The digits-only form matched after prepending `66`.
    Prefixed66,
    /// The digits-only form matched after prepending `6`.
    Prefixed6,
}

impl fmt::Display for ResolveTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Exact => "exact",
            Self::Digits => "digits",
            Self::Prefixed66 => "66-prefix",
            Self::Prefixed6 => "6-prefix",
        };
        f.write_str(label)
    }
}

/// Outcome of resolving one identifier token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The replacement text: the mapped name on a hit, the original token
    /// verbatim on a miss.
    pub text: String,
    /// The tier that fired, or `None` on a miss.
    pub tier: Option<ResolveTier>,
}

impl Resolution {
    #[must_use]
    pub fn matched(&self) -> bool {
        self.tier.is_some()
    }
}

/// Immutable two-tier lookup table from identifier to display name.
///
/// Built once per mapping source and shared read-only by every rewrite in a
/// run; resolution never mutates it, so it may be shared across threads
/// without locking.
#[derive(Debug, Clone, Default)]
pub struct MappingIndex {
    /// Trimmed id, case-sensitive, exactly as encountered.
    exact: HashMap<String, String>,
    /// Digits-only form of the id; ids without digits are absent.
    digits: HashMap<String, String>,
}

impl MappingIndex {
    /// Builds both indexes from an ordered entry sequence.
    ///
    /// Ids and names are trimmed; entries with an empty id are skipped, and
    /// a repeated key overwrites the earlier entry in each index
    /// independently. Entries whose name ends up empty are dropped after
    /// the overwrite pass, so an id mapped to nothing stays unmapped even
    /// when an earlier row had a name for it.
    #[must_use]
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = MappingEntry>,
    {
        let mut exact = HashMap::new();
        let mut digits = HashMap::new();
        for entry in entries {
            let id = entry.id.trim();
            if id.is_empty() {
                continue;
            }
            let name = entry.name.trim().to_string();
            let digit_key = digits_only(id);
            if !digit_key.is_empty() {
                digits.insert(digit_key, name.clone());
            }
            exact.insert(id.to_string(), name);
        }
        exact.retain(|_, name| !name.is_empty());
        digits.retain(|_, name| !name.is_empty());
        Self { exact, digits }
    }

    /// Number of resolvable ids in the exact index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    /// Resolves one identifier token through the fallback chain.
    ///
    /// Tier order: the token itself against the exact index, then its
    /// digits-only form, then the `66`- and `6`-prefixed forms of that
    /// digit string (only when it is 3 or 4 digits long). Each candidate
    /// checks the exact index before the digits index, and the first hit
    /// wins. A token whose digits-only form is empty, or that no candidate
    /// matches, comes back verbatim as a miss.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Resolution {
        if let Some(name) = self.exact.get(token) {
            return Resolution {
                text: name.clone(),
                tier: Some(ResolveTier::Exact),
            };
        }
        let digit_form = digits_only(token);
        if digit_form.is_empty() {
            return Resolution {
                text: token.to_string(),
                tier: None,
            };
        }
        let mut candidates = Vec::with_capacity(3);
        if matches!(digit_form.len(), 3 | 4) {
            candidates.push((format!("66{digit_form}"), ResolveTier::Prefixed66));
            candidates.push((format!("6{digit_form}"), ResolveTier::Prefixed6));
        }
        candidates.insert(0, (digit_form, ResolveTier::Digits));
        for (candidate, tier) in candidates {
            if let Some(name) = self
                .exact
                .get(&candidate)
                .or_else(|| self.digits.get(&candidate))
            {
                return Resolution {
                    text: name.clone(),
                    tier: Some(tier),
                };
            }
        }
        Resolution {
            text: token.to_string(),
            tier: None,
        }
    }
}

/// Deletes every non-digit character from a string.
#[must_use]
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> MappingEntry {
        MappingEntry::new(id, name)
    }

    #[test]
    fn empty_input_yields_empty_index() {
        let index = MappingIndex::build(Vec::new());
        assert!(index.is_empty());
        assert!(!index.resolve("101").matched());
    }

    #[test]
    fn exact_hit_wins_first() {
        let index = MappingIndex::build(vec![entry("101", "Sword")]);
        let resolution = index.resolve("101");
        assert_eq!(resolution.text, "Sword");
        assert_eq!(resolution.tier, Some(ResolveTier::Exact));
    }

    #[test]
    fn trims_ids_and_names() {
        let index = MappingIndex::build(vec![entry(" 101 ", "  Sword ")]);
        assert_eq!(index.resolve("101").text, "Sword");
    }

    #[test]
    fn last_entry_wins_for_duplicate_ids() {
        let index = MappingIndex::build(vec![entry("101", "Sword"), entry("101", "Blade")]);
        assert_eq!(index.resolve("101").text, "Blade");
    }

    #[test]
    fn empty_name_makes_id_unmapped_even_after_overwrite() {
        let index = MappingIndex::build(vec![entry("101", "Sword"), entry("101", "")]);
        let resolution = index.resolve("101");
        assert!(!resolution.matched());
        assert_eq!(resolution.text, "101");
    }

    #[test]
    fn empty_ids_are_skipped() {
        let index = MappingIndex::build(vec![entry("", "Ghost"), entry("  ", "Ghost")]);
        assert!(index.is_empty());
    }

    #[test]
    fn digits_index_strips_punctuation() {
        let index = MappingIndex::build(vec![entry("ID-6704", "Widget")]);
        let resolution = index.resolve("6704");
        assert_eq!(resolution.text, "Widget");
        assert_eq!(resolution.tier, Some(ResolveTier::Digits));
    }

    #[test]
    fn punctuated_token_resolves_through_digit_form() {
        let index = MappingIndex::build(vec![entry("6704", "Widget")]);
        let resolution = index.resolve("#6704");
        assert_eq!(resolution.text, "Widget");
        assert_eq!(resolution.tier, Some(ResolveTier::Digits));
    }

    #[test]
    fn shortened_ids_recover_their_prefixed_canonical_form() {
        // 771 -> 66771 via the `66` prefix candidate.
        let index = MappingIndex::build(vec![entry("66771", "BigAxe")]);
        let resolution = index.resolve("771");
        assert_eq!(resolution.text, "BigAxe");
        assert_eq!(resolution.tier, Some(ResolveTier::Prefixed66));

        // 6704 -> 66704 via the `6` prefix candidate.
        let index = MappingIndex::build(vec![entry("66704", "Widget")]);
        let resolution = index.resolve("6704");
        assert_eq!(resolution.text, "Widget");
        assert_eq!(resolution.tier, Some(ResolveTier::Prefixed6));
    }

    #[test]
    fn six_prefix_fires_when_66_prefix_misses() {
        let index = MappingIndex::build(vec![entry("6771", "Hatchet")]);
        let resolution = index.resolve("771");
        assert_eq!(resolution.text, "Hatchet");
        assert_eq!(resolution.tier, Some(ResolveTier::Prefixed6));
    }

    #[test]
    fn long_digit_strings_get_no_prefix_candidates() {
        let index = MappingIndex::build(vec![entry("6612345", "Relic")]);
        assert!(!index.resolve("12345").matched());
    }

    #[test]
    fn token_without_digits_misses_verbatim() {
        let index = MappingIndex::build(vec![entry("101", "Sword")]);
        let resolution = index.resolve("abc");
        assert!(!resolution.matched());
        assert_eq!(resolution.text, "abc");
    }

    #[test]
    fn resolve_is_pure() {
        let index = MappingIndex::build(vec![entry("101", "Sword")]);
        assert_eq!(index.resolve("101"), index.resolve("101"));
        assert_eq!(index.resolve("999"), index.resolve("999"));
    }

    #[test]
    fn digits_only_examples() {
        assert_eq!(digits_only("ID-6704"), "6704");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only("66771"), "66771");
    }
}
