//! Separator-preserving tokenizer for the cell mini-syntax.

/// One element of a cell body after splitting on segment separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// A `&` or `|` separator, kept verbatim in its original slot.
    Separator(char),
    /// A segment of the form `idspec[$suffix]*`; may be empty when
    /// separators are adjacent or sit at the ends of the body.
    Segment(&'a str),
}

/// Splits a cell body on `&` and `|`, retaining each separator as its own
/// element in original position. Mixed separators within one body stay
/// exactly where they were.
#[must_use]
pub fn split_segments(body: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (at, ch) in body.char_indices() {
        if ch == '&' || ch == '|' {
            pieces.push(Piece::Segment(&body[start..at]));
            pieces.push(Piece::Separator(ch));
            start = at + ch.len_utf8();
        }
    }
    pieces.push(Piece::Segment(&body[start..]));
    pieces
}

/// A parsed segment: the id group plus its opaque `$`-suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Everything before the first `$`; zero or more `-`-joined tokens.
    pub idspec: &'a str,
    /// Suffix parts in original order, `$` markers removed.
    pub suffixes: Vec<&'a str>,
}

impl<'a> Segment<'a> {
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let mut parts = raw.split('$');
        let idspec = parts.next().unwrap_or("");
        Self {
            idspec,
            suffixes: parts.collect(),
        }
    }

    /// Identifier tokens in order, empty pieces discarded.
    #[must_use]
    pub fn tokens(&self) -> Vec<&'a str> {
        self.idspec.split('-').filter(|t| !t.is_empty()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_mixed_separators_in_place() {
        let pieces = split_segments("7075|80072&523");
        assert_eq!(
            pieces,
            vec![
                Piece::Segment("7075"),
                Piece::Separator('|'),
                Piece::Segment("80072"),
                Piece::Separator('&'),
                Piece::Segment("523"),
            ]
        );
    }

    #[test]
    fn adjacent_separators_yield_empty_segments() {
        let pieces = split_segments("&&");
        assert_eq!(
            pieces,
            vec![
                Piece::Segment(""),
                Piece::Separator('&'),
                Piece::Segment(""),
                Piece::Separator('&'),
                Piece::Segment(""),
            ]
        );
    }

    #[test]
    fn body_without_separators_is_one_segment() {
        assert_eq!(split_segments("220-221$1"), vec![Piece::Segment("220-221$1")]);
    }

    #[test]
    fn parses_idspec_and_suffixes() {
        let segment = Segment::parse("220-221$1$80");
        assert_eq!(segment.idspec, "220-221");
        assert_eq!(segment.suffixes, vec!["1", "80"]);
        assert_eq!(segment.tokens(), vec!["220", "221"]);
    }

    #[test]
    fn empty_idspec_has_no_tokens() {
        let segment = Segment::parse("$1");
        assert_eq!(segment.idspec, "");
        assert_eq!(segment.suffixes, vec!["1"]);
        assert!(segment.tokens().is_empty());
    }

    #[test]
    fn discards_empty_token_pieces() {
        let segment = Segment::parse("-220--221-");
        assert_eq!(segment.tokens(), vec!["220", "221"]);
    }
}
