//! A module implementing lexical analysis (tokenization) of test selection strings.
//!
//! A selection string is a flat list of test names. Names are maximal runs of
//! ASCII letters, digits and underscores; every other character is a separator,
//! so `"foo,bar baz;qux"` and `"foo bar baz qux"` describe the same list.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexingState {
    Separator,
    ReadingToken,
}

struct LexingFSM<'a> {
    input: std::str::Chars<'a>,
    state: LexingState,
    buffer: String,
}

impl<'a> LexingFSM<'a> {
    /// Creates a new instance of the lexical analysis Finite State Machine.
    ///
    /// # Arguments
    /// * `source` - The selection string to be lexed.
    fn new(source: &'a str) -> Self {
        LexingFSM {
            input: source.chars(),
            state: LexingState::Separator,
            buffer: String::new(),
        }
    }

    /// Runs the machine over the whole input and returns the collected tokens.
    fn make_tokens(mut self) -> Vec<String> {
        let mut out = Vec::new();

        while let Some(ch) = self.input.next() {
            match self.state {
                LexingState::Separator => self.handle_separator(ch),
                LexingState::ReadingToken => self.handle_token(ch, &mut out),
            }
        }

        self.finalize_token(&mut out);
        out
    }

    fn handle_separator(&mut self, ch: char) {
        if is_token_char(ch) {
            self.buffer.push(ch);
            self.state = LexingState::ReadingToken;
        }
    }

    fn handle_token(&mut self, ch: char, out: &mut Vec<String>) {
        if is_token_char(ch) {
            self.buffer.push(ch);
        } else {
            self.finalize_token(out);
            self.state = LexingState::Separator;
        }
    }

    /// Moves the buffer into `out` unless it is empty.
    fn finalize_token(&mut self, out: &mut Vec<String>) {
        if !self.buffer.is_empty() {
            out.push(std::mem::take(&mut self.buffer));
        }
    }
}

/// Returns true for characters that may appear inside a test name.
pub fn is_token_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// The main entry point function to perform lexical analysis.
///
/// Splits `source` into its test-name tokens, in order of appearance.
/// Duplicates are kept. An empty or separator-only source yields an empty vector.
///
/// ```
/// use surtur_tests::lexer::split_into_tokens;
/// assert_eq!(split_into_tokens("foo,bar_baz;42qux"), ["foo", "bar_baz", "42qux"]);
/// ```
pub fn split_into_tokens(source: &str) -> Vec<String> {
    LexingFSM::new(source).make_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators() {
        assert_eq!(
            split_into_tokens("foo,bar_baz;42qux"),
            vec!["foo", "bar_baz", "42qux"]
        );
    }

    #[test]
    fn test_surrounding_separators_collapse() {
        assert_eq!(split_into_tokens("  foo  "), vec!["foo"]);
        assert_eq!(split_into_tokens(",,;foo;;, bar ,"), vec!["foo", "bar"]);
    }

    #[test]
    fn test_empty_source() {
        assert!(split_into_tokens("").is_empty());
    }

    #[test]
    fn test_separator_only_sources() {
        for source in [" ", ",", " ,;\t\n", "!@#$%^&*()", "-.-", "ü é ß"] {
            assert!(
                split_into_tokens(source).is_empty(),
                "expected no tokens in {:?}",
                source
            );
        }
    }

    #[test]
    fn test_tokens_starting_with_digits_are_kept() {
        // A digit right after a separator still starts a token.
        assert_eq!(split_into_tokens("a,1,_2,b3"), vec!["a", "1", "_2", "b3"]);
    }

    #[test]
    fn test_join_and_split_gives_back_tokens() {
        let names = vec!["parser", "lexer_2", "_private", "42", "X"];
        for sep in [',', ' ', ';', '|', '-', '\n', '.'] {
            let joined = names.join(&sep.to_string());
            assert_eq!(split_into_tokens(&joined), names, "separator {:?}", sep);
        }
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(split_into_tokens("a a,a"), vec!["a", "a", "a"]);
    }

    #[test]
    fn test_long_token_has_no_length_limit() {
        let long = "x".repeat(10_000);
        let source = format!(";{};", long);
        assert_eq!(split_into_tokens(&source), vec![long]);
    }

    #[test]
    fn test_non_ascii_letters_separate() {
        assert_eq!(split_into_tokens("caféau"), vec!["caf", "au"]);
    }

    #[test]
    fn test_is_token_char() {
        assert!(is_token_char('a'));
        assert!(is_token_char('Z'));
        assert!(is_token_char('0'));
        assert!(is_token_char('_'));
        assert!(!is_token_char('-'));
        assert!(!is_token_char('*'));
        assert!(!is_token_char('é'));
    }
}
