use serde::Serialize;

/// The bracket pair a scan tracks. Every other character is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BracePair {
    /// `{` / `}`
    #[default]
    Brace,
    /// `[` / `]`
    Bracket,
    /// `(` / `)`
    Paren,
}

impl BracePair {
    pub fn opener(self) -> char {
        match self {
            BracePair::Brace => '{',
            BracePair::Bracket => '[',
            BracePair::Paren => '(',
        }
    }

    pub fn closer(self) -> char {
        match self {
            BracePair::Brace => '}',
            BracePair::Bracket => ']',
            BracePair::Paren => ')',
        }
    }

    /// Singular noun used in diagnostics ("Extra closing brace ...").
    pub fn noun(self) -> &'static str {
        match self {
            BracePair::Brace => "brace",
            BracePair::Bracket => "bracket",
            BracePair::Paren => "parenthesis",
        }
    }

    /// Plural noun used in the balanced verdict ("Braces are balanced").
    pub fn plural(self) -> &'static str {
        match self {
            BracePair::Brace => "braces",
            BracePair::Bracket => "brackets",
            BracePair::Paren => "parentheses",
        }
    }

    /// Classifies a single character against this pair.
    pub fn classify(self, ch: char) -> Option<Token> {
        if ch == self.opener() {
            Some(Token::Open)
        } else if ch == self.closer() {
            Some(Token::Close)
        } else {
            None
        }
    }
}

impl std::fmt::Display for BracePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.opener(), self.closer())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Open,
    Close,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair_is_curly() {
        assert_eq!(BracePair::default(), BracePair::Brace);
        assert_eq!(BracePair::default().to_string(), "{}");
    }

    #[test]
    fn test_classify_only_tracked_pair() {
        let pair = BracePair::Bracket;
        assert_eq!(pair.classify('['), Some(Token::Open));
        assert_eq!(pair.classify(']'), Some(Token::Close));
        assert_eq!(pair.classify('{'), None);
        assert_eq!(pair.classify(')'), None);
        assert_eq!(pair.classify('a'), None);
    }

    #[test]
    fn test_nouns() {
        assert_eq!(BracePair::Brace.noun(), "brace");
        assert_eq!(BracePair::Paren.plural(), "parentheses");
    }
}
