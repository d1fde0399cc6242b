use regex::{Captures, Regex};

/// Whitespace and running-artifact cleanup, applied before any splitting.
///
/// By default every whitespace run (newlines included) collapses to a single
/// space, which erases the document's line structure. With
/// `keep_line_breaks` a run containing a newline collapses to a single `\n`
/// instead, so later line-based heuristics still see block-internal lines.
pub struct Normalizer {
    whitespace: Regex,
    page_footer: Regex,
    session_header: Regex,
    keep_line_breaks: bool,
}

impl Normalizer {
    pub fn new(keep_line_breaks: bool) -> Self {
        Self {
            whitespace: Regex::new(r"\s+").expect("whitespace pattern"),
            page_footer: Regex::new(r"페이지\s*\d+").expect("page-footer pattern"),
            session_header: Regex::new(r"제\d+회.*?기출문제").expect("session-header pattern"),
            keep_line_breaks,
        }
    }

    /// Collapse whitespace, strip page footers and exam-session headers,
    /// and trim. Always returns a string, possibly empty.
    pub fn normalize(&self, raw: &str) -> String {
        let collapsed = if self.keep_line_breaks {
            self.whitespace
                .replace_all(raw, |caps: &Captures| {
                    if caps[0].contains('\n') { "\n" } else { " " }
                })
                .into_owned()
        } else {
            self.whitespace.replace_all(raw, " ").into_owned()
        };

        let without_footers = self.page_footer.replace_all(&collapsed, "");
        let without_headers = self.session_header.replace_all(&without_footers, "");
        without_headers.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        let normalizer = Normalizer::new(false);
        assert_eq!(
            normalizer.normalize("a  b\t c\n\nd"),
            "a b c d"
        );
    }

    #[test]
    fn test_keep_line_breaks_preserves_newlines() {
        let normalizer = Normalizer::new(true);
        assert_eq!(
            normalizer.normalize("a  b\n\nc \t d"),
            "a b\nc d"
        );
    }

    #[test]
    fn test_removes_page_footers() {
        for keep in [false, true] {
            let normalizer = Normalizer::new(keep);
            let cleaned = normalizer.normalize("본문 페이지 12 계속");
            assert!(!cleaned.contains("페이지"), "mode keep={}", keep);
        }
    }

    #[test]
    fn test_removes_session_headers() {
        for keep in [false, true] {
            let normalizer = Normalizer::new(keep);
            let cleaned = normalizer.normalize("제3회 정보처리기사 기출문제 1. 다음 중");
            assert!(!cleaned.contains("기출문제"), "mode keep={}", keep);
            assert!(cleaned.contains("1. 다음 중"));
        }
    }

    #[test]
    fn test_empty_input_stays_empty() {
        let normalizer = Normalizer::new(false);
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("   \n  "), "");
    }
}
