use regex::Regex;

/// One undecomposed question block, still borrowing the normalized text
#[derive(Debug, Clone, Copy)]
pub struct RawBlock<'t> {
    /// Digit run exactly as printed, not yet parsed
    pub number: &'t str,
    /// Text between this marker and the next accepted one (or end of text)
    pub body: &'t str,
    /// Byte offset of the marker in the normalized text
    pub offset: usize,
}

/// Finds question-number markers and slices the text into per-question
/// blocks. Everything before the first accepted marker (cover pages,
/// instructions) is discarded.
pub struct BoundarySplitter {
    marker: Regex,
}

impl BoundarySplitter {
    pub fn new() -> Self {
        Self {
            marker: Regex::new(r"(\d+)([.)])").expect("boundary-marker pattern"),
        }
    }

    /// Slice `text` into one block per accepted boundary marker.
    ///
    /// The digit run is handed over unparsed so that an overflowing number
    /// stays a per-block problem for the decomposer instead of a splitter
    /// failure.
    pub fn split<'t>(&self, text: &'t str) -> Vec<RawBlock<'t>> {
        // (marker start, body start, digit run)
        let mut markers: Vec<(usize, usize, &'t str)> = Vec::new();
        for caps in self.marker.captures_iter(text) {
            let whole = caps.get(0).expect("match group 0");
            let number = caps.get(1).expect("digit group");
            let delimiter = caps.get(2).expect("delimiter group");
            if self.accepts(text, whole.start(), whole.end(), delimiter.as_str()) {
                markers.push((whole.start(), whole.end(), number.as_str()));
            }
        }

        let mut blocks = Vec::with_capacity(markers.len());
        for (i, &(start, body_start, number)) in markers.iter().enumerate() {
            let body_end = markers
                .get(i + 1)
                .map(|&(next_start, _, _)| next_start)
                .unwrap_or(text.len());
            blocks.push(RawBlock {
                number,
                body: text[body_start..body_end].trim_start(),
                offset: start,
            });
        }
        blocks
    }

    /// A candidate `N.`/`N)` counts as a question boundary only when:
    /// - it sits at the start of text or after whitespace (a digit run glued
    ///   to preceding text is part of that text),
    /// - the delimiter is not followed by another digit (rejects decimals
    ///   like `2.5`),
    /// - a `)` delimiter sits at the start of a line. Mid-line `N)` is an
    ///   option marker; in fully collapsed text this means `N)` can only
    ///   open the document.
    fn accepts(&self, text: &str, start: usize, end: usize, delimiter: &str) -> bool {
        let preceding = text[..start].chars().next_back();
        if !(start == 0 || preceding.is_some_and(|c| c.is_whitespace())) {
            return false;
        }

        if text[end..].chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return false;
        }

        if delimiter == ")" && !(start == 0 || preceding == Some('\n')) {
            return false;
        }

        true
    }
}

impl Default for BoundarySplitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<RawBlock<'_>> {
        BoundarySplitter::new().split(text)
    }

    #[test]
    fn test_splits_in_document_order() {
        let blocks = split("1. first 3. third 2. second");
        let numbers: Vec<&str> = blocks.iter().map(|b| b.number).collect();
        assert_eq!(numbers, vec!["1", "3", "2"]);
        assert_eq!(blocks[0].body, "first ");
        assert_eq!(blocks[1].body, "third ");
        assert_eq!(blocks[2].body, "second");
    }

    #[test]
    fn test_discards_preamble() {
        let blocks = split("표지 안내문 1. 첫 문제 2. 둘째 문제");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].offset, "표지 안내문 ".len());
    }

    #[test]
    fn test_rejects_decimal_numbers() {
        let blocks = split("1. 값이 2.5 이상인 경우 2. 다음");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].body, "값이 2.5 이상인 경우 ");
    }

    #[test]
    fn test_rejects_glued_digit_runs() {
        let blocks = split("문제1. 이것은 경계가 아니다");
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_midline_paren_is_not_a_boundary() {
        let blocks = split("1. 고르시오 1)하나 2)둘");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "고르시오 1)하나 2)둘");
    }

    #[test]
    fn test_line_start_paren_is_a_boundary() {
        let blocks = split("1) 첫 문제\n내용\n2) 둘째 문제");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].number, "1");
        assert_eq!(blocks[1].number, "2");
    }

    #[test]
    fn test_trailing_marker_yields_empty_body() {
        let blocks = split("1. 내용 2.");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].body, "");
    }

    #[test]
    fn test_overflowing_digit_run_is_passed_through() {
        let blocks = split("1. a 99999999999999999999. b");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].number, "99999999999999999999");
    }
}
