use crate::dict::ZhuyinDict;
use crate::unicode::{self, Category};

/// Longest dictionary key probed at each position.
pub(crate) const MAX_WINDOW: usize = 20;

/// Shorter probe window for the markup-preserving path, which may process
/// long mixed documents.
pub(crate) const MARKUP_MAX_WINDOW: usize = 6;

/// One unit of annotated output. Tokens exist only between tokenization and
/// rendering within a single call; they carry no identity beyond their
/// position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// `\n`
    Break,
    /// `\t`
    Tab,
    /// Maximal run of Latin letters, digits, and dashes, kept whole so words
    /// are never broken mid-run.
    Latin(String),
    /// Han characters with `readings` aligned 1:1 to the chars of `text`.
    Han { text: String, readings: Vec<String> },
    /// Han character without a usable reading, boxed without ruby text.
    Bare(char),
    /// Anything else, passed through one character at a time.
    Other(char),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TokenizerOptions {
    pub max_window: usize,
    /// Emit [`Token::Bare`] instead of [`Token::Other`] for Han characters
    /// the dictionary cannot annotate, keeping box widths uniform inside
    /// existing markup.
    pub bare_unmatched_han: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            max_window: MAX_WINDOW,
            bare_unmatched_han: false,
        }
    }
}

/// Walk `text` left to right, emitting breaks, tabs, halfwidth runs, and
/// longest-match Han tokens.
pub(crate) fn tokenize(text: &str, dict: &ZhuyinDict, opts: TokenizerOptions) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match unicode::classify(chars[i]) {
            Category::Break => {
                tokens.push(Token::Break);
                i += 1;
            }
            Category::Tab => {
                tokens.push(Token::Tab);
                i += 1;
            }
            Category::LatinRun => {
                let mut j = i + 1;
                while j < chars.len() && unicode::classify(chars[j]) == Category::LatinRun {
                    j += 1;
                }
                tokens.push(Token::Latin(chars[i..j].iter().collect()));
                i = j;
            }
            Category::Other => {
                tokens.push(Token::Other(chars[i]));
                i += 1;
            }
            Category::Han => {
                let (token, consumed) = match_han(&chars[i..], dict, opts);
                tokens.push(token);
                i += consumed;
            }
        }
    }
    tokens
}

/// Longest-match probe starting at a Han character. Returns the resolved
/// token and the number of characters it covers.
///
/// Longest-first prefers phrase readings (proper nouns, fixed compounds)
/// over per-character default pronunciations. Once a length matches with
/// aligned syllables it commits; there is no backtracking.
fn match_han(rest: &[char], dict: &ZhuyinDict, opts: TokenizerOptions) -> (Token, usize) {
    let limit = opts.max_window.min(rest.len());
    for len in (1..=limit).rev() {
        let candidate: String = rest[..len].iter().collect();
        if !unicode::is_candidate(&candidate) {
            continue;
        }
        let Some(reading) = dict.get(&candidate) else {
            continue;
        };
        let syllables: Vec<&str> = reading.split(' ').collect();
        if syllables.len() == len {
            return (
                Token::Han {
                    text: candidate,
                    readings: syllables.into_iter().map(str::to_string).collect(),
                },
                len,
            );
        }
        // Syllable count disagrees with the key length: a data-quality
        // problem, not a segmentation one. Shorter windows are not retried;
        // the current character takes the single-character fallback.
        break;
    }
    (single_char_fallback(rest[0], dict, opts), 1)
}

fn single_char_fallback(c: char, dict: &ZhuyinDict, opts: TokenizerOptions) -> Token {
    let key = c.to_string();
    if let Some(syllables) = dict.aligned_syllables(&key) {
        return Token::Han {
            readings: syllables.into_iter().map(str::to_string).collect(),
            text: key,
        };
    }
    if opts.bare_unmatched_han {
        Token::Bare(c)
    } else {
        Token::Other(c)
    }
}
