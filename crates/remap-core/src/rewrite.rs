//! Cell rewriting: resolve identifier tokens and reassemble the cell.

use remap_model::{CellValue, MappingIndex};
use tracing::trace;

use crate::segment::{Piece, Segment, split_segments};

/// Conventional item-list marker used by the source data.
pub const DEFAULT_PREFIX: &str = "物品=";

/// Prefix handling for a rewrite pass.
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Literal marker that introduces an identifier expression. Stripped
    /// from the body before parsing when present; absence is not an error.
    pub prefix: String,
    /// Prepend the prefix to the rewritten text.
    pub keep_prefix: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            keep_prefix: false,
        }
    }
}

/// Result of rewriting one cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// The rewritten cell text.
    pub text: String,
    /// Tokens that failed to resolve, in encounter order, with repeats.
    pub unmatched: Vec<String>,
}

impl RewriteOutcome {
    #[must_use]
    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }
}

/// Rewrites a single cell against a mapping index.
///
/// Empty cells come back unchanged with no unmatched tokens. Everything
/// else is normalized to text, trimmed, optionally stripped of its prefix,
/// split into segments, and reassembled with every identifier token
/// replaced by its resolved name. Unresolved tokens stay verbatim in the
/// output so the rewritten cell remains syntactically valid and diff-able
/// against the original.
#[must_use]
pub fn rewrite(value: &CellValue, options: &RewriteOptions, index: &MappingIndex) -> RewriteOutcome {
    if value.is_empty() {
        return RewriteOutcome {
            text: value.to_text(),
            unmatched: Vec::new(),
        };
    }
    let normalized = value.to_text();
    let trimmed = normalized.trim();
    let body = trimmed.strip_prefix(&options.prefix).unwrap_or(trimmed);

    let mut core = String::with_capacity(body.len());
    let mut unmatched = Vec::new();
    for piece in split_segments(body) {
        match piece {
            Piece::Separator(ch) => core.push(ch),
            Piece::Segment("") => {}
            Piece::Segment(raw) => core.push_str(&rewrite_segment(raw, index, &mut unmatched)),
        }
    }

    let text = if options.keep_prefix {
        format!("{}{}", options.prefix, core)
    } else {
        core
    };
    RewriteOutcome { text, unmatched }
}

/// Convenience wrapper over [`rewrite`] for callers holding plain text.
#[must_use]
pub fn rewrite_text(text: &str, options: &RewriteOptions, index: &MappingIndex) -> RewriteOutcome {
    rewrite(&CellValue::Text(text.to_string()), options, index)
}

fn rewrite_segment(raw: &str, index: &MappingIndex, unmatched: &mut Vec<String>) -> String {
    let segment = Segment::parse(raw);
    let tokens = segment.tokens();
    let new_ids = if tokens.is_empty() {
        // Nothing to resolve: segments like `$1` pass through untouched.
        segment.idspec.to_string()
    } else {
        let mut mapped = Vec::with_capacity(tokens.len());
        for token in tokens {
            let resolution = index.resolve(token);
            match resolution.tier {
                Some(tier) => trace!(token, %tier, name = %resolution.text, "resolved"),
                None => unmatched.push(token.to_string()),
            }
            mapped.push(resolution.text);
        }
        mapped.join("-")
    };
    if segment.suffixes.is_empty() {
        new_ids
    } else {
        format!("{}${}", new_ids, segment.suffixes.join("$"))
    }
}
