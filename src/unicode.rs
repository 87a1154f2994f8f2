//! Character-level Unicode classification for mixed Chinese text.

/// Class of a single code point, in the priority order the tokenizer
/// consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// `\n`, a paragraph break.
    Break,
    /// `\t`, indentation.
    Tab,
    /// Latin letter, ASCII digit, or dash variant. Consecutive members are
    /// merged into a single halfwidth run by the tokenizer.
    LatinRun,
    /// Annotatable Han character.
    Han,
    /// Everything else: punctuation, symbols, spaces, non-Han scripts.
    Other,
}

/// Check the common Han blocks: URO (U+4E00..U+9FFF), Extension A
/// (U+3400..U+4DBF), and Extension B (U+20000..U+2A6DF). Rarer extension
/// blocks never appear in the dictionary, so the three-range check is
/// preferred over a full `\p{Han}` table.
pub fn is_han(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// Full-width punctuation that never carries an annotation and must not be
/// absorbed into a dictionary phrase.
pub fn is_excluded_punct(c: char) -> bool {
    matches!(
        c,
        '。' | '，' | '、' | '「' | '」' | '？' | '！' | '：' | '；' | '（' | '）' | '［' | '］'
    )
}

/// Latin letters (ASCII plus the accented Latin-1 supplement block), ASCII
/// digits, and dash variants (hyphen, en-dash, em-dash, minus sign).
pub fn is_latin_run_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || ('\u{00C0}'..='\u{00FF}').contains(&c)
        || matches!(c, '-' | '\u{2013}' | '\u{2014}' | '\u{2212}')
}

pub fn classify(c: char) -> Category {
    match c {
        '\n' => Category::Break,
        '\t' => Category::Tab,
        _ if is_latin_run_char(c) => Category::LatinRun,
        _ if is_han(c) && !is_excluded_punct(c) => Category::Han,
        _ => Category::Other,
    }
}

/// Check whether a substring may be probed against the dictionary.
///
/// A candidate needs at least one Han character and must not contain any
/// excluded punctuation, so phrase lookups never span a clause boundary.
pub fn is_candidate(s: &str) -> bool {
    let mut has_han = false;
    for c in s.chars() {
        if is_excluded_punct(c) {
            return false;
        }
        has_han |= is_han(c);
    }
    has_han
}
