use regex::Regex;

/// The single option-marker style a document uses for its choice lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionConvention {
    /// Circled numerals: ① ② ③ ④ ⑤
    CircledDigit,
    /// ASCII digit plus paren: 1) 2) 3) 4) 5)
    DigitParen,
    /// Hangul ordinal plus paren: 가) 나) 다) 라) 마)
    HangulParen,
    /// Latin letter plus paren: A) B) C) D) E)
    LetterParen,
}

impl OptionConvention {
    /// Short name for diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            OptionConvention::CircledDigit => "circled-digit",
            OptionConvention::DigitParen => "digit-paren",
            OptionConvention::HangulParen => "hangul-paren",
            OptionConvention::LetterParen => "letter-paren",
        }
    }
}

/// The four marker patterns in fixed priority order.
///
/// Detection scans the list top to bottom and picks the first convention
/// with at least `min_evidence` matches, so priority order is the tie-break.
pub struct ConventionSet {
    patterns: Vec<(OptionConvention, Regex)>,
    min_evidence: usize,
}

impl ConventionSet {
    pub fn new(min_evidence: usize) -> Self {
        let patterns = vec![
            (
                OptionConvention::CircledDigit,
                Regex::new(r"[①②③④⑤]").expect("circled-digit pattern"),
            ),
            (
                OptionConvention::DigitParen,
                Regex::new(r"[1-5]\)").expect("digit-paren pattern"),
            ),
            (
                OptionConvention::HangulParen,
                Regex::new(r"[가나다라마]\)").expect("hangul-paren pattern"),
            ),
            (
                OptionConvention::LetterParen,
                Regex::new(r"[A-E]\)").expect("letter-paren pattern"),
            ),
        ];

        Self {
            patterns,
            min_evidence,
        }
    }

    /// Pick the convention for `text`, or `None` when no style has enough
    /// evidence. A `None` is final: it means "no extractable options", not
    /// "retry with a different strategy".
    pub fn detect(&self, text: &str) -> Option<OptionConvention> {
        for (convention, pattern) in &self.patterns {
            let matches = pattern.find_iter(text).take(self.min_evidence).count();
            if matches >= self.min_evidence {
                return Some(*convention);
            }
        }
        None
    }

    /// The marker pattern for one convention
    pub fn pattern(&self, convention: OptionConvention) -> &Regex {
        self.patterns
            .iter()
            .find(|(c, _)| *c == convention)
            .map(|(_, p)| p)
            .expect("every convention has a registered pattern")
    }
}
