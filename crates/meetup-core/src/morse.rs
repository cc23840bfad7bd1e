//! # Morse Encoding
//!
//! Converts plain text into Morse code using a fixed table of letters,
//! digits and a handful of punctuation marks.
//!
//! Output layout: each input word becomes one output line, with the codes
//! of its characters concatenated without separators. Each input line is
//! joined to the next with a newline, so an empty input line shows up as an
//! empty output line. Characters outside the table are dropped.
//!
//! Line and word boundaries are the full Unicode set: `\r`, `\v`, `\f`,
//! the file/group/record separators, NEL and U+2028/U+2029 all end a line,
//! not just `\n` and `\r\n`.

/// Characters that end a line. `\r\n` counts as a single break.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Characters that separate words within a line.
fn is_word_break(c: char) -> bool {
    c.is_whitespace() || c == '\x1f'
}

/// Split text into lines on every line break. A trailing break does not
/// produce an extra empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..index]);
        start = index + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Morse code for a single character, ignoring case.
///
/// Case folding is full Unicode (`ı` maps to `I`); a character whose upper
/// case is more than one character (`ß`) has no code.
#[must_use]
pub fn lookup(c: char) -> Option<&'static str> {
    let mut upper = c.to_uppercase();
    let (Some(folded), None) = (upper.next(), upper.next()) else {
        return None;
    };

    let code = match folded {
        'A' => ".-",
        'B' => "-...",
        'C' => "-.-.",
        'D' => "-..",
        'E' => ".",
        'F' => "..-.",
        'G' => "--.",
        'H' => "....",
        'I' => "..",
        'J' => ".---",
        'K' => "-.-",
        'L' => ".-..",
        'M' => "--",
        'N' => "-.",
        'O' => "---",
        'P' => ".--.",
        'Q' => "--.-",
        'R' => ".-.",
        'S' => "...",
        'T' => "-",
        'U' => "..-",
        'V' => "...-",
        'W' => ".--",
        'X' => "-..-",
        'Y' => "-.--",
        'Z' => "--..",
        '0' => "-----",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        '.' => ".-.-.-",
        ',' => "--..--",
        ':' => "---...",
        '\'' => ".----.",
        '-' => "-....-",
        _ => return None,
    };
    Some(code)
}

/// Encode one word. Unmapped characters are skipped.
#[must_use]
pub fn encode_word(word: &str) -> String {
    word.chars().filter_map(lookup).collect()
}

/// Encode a full text, one word per output line.
#[must_use]
pub fn encode_text(text: &str) -> String {
    split_lines(text)
        .into_iter()
        .map(|line| {
            line.split(is_word_break)
                .filter(|word| !word.is_empty())
                .map(encode_word)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup('s'), Some("..."));
        assert_eq!(lookup('S'), Some("..."));
        assert_eq!(lookup('\''), Some(".----."));
    }

    #[test]
    fn unmapped_characters_are_dropped() {
        assert_eq!(lookup('!'), None);
        assert_eq!(lookup('é'), None);
        assert_eq!(encode_word("so!s"), "...---...");
    }

    #[test]
    fn words_go_on_separate_lines() {
        assert_eq!(encode_text("Hi there"), "......\n-......-..");
    }

    #[test]
    fn lines_and_blank_lines() {
        assert_eq!(encode_text("e\n\nt\n"), ".\n\n-");
    }

    #[test]
    fn word_without_mapped_characters_is_empty() {
        assert_eq!(encode_text("a !! b"), ".-\n\n-...");
    }

    #[test]
    fn dotless_i_folds_to_upper_case_i() {
        assert_eq!(lookup('ı'), Some(".."));
        assert_eq!(lookup('ß'), None);
    }

    #[test]
    fn bare_carriage_returns_split_lines() {
        assert_eq!(encode_text("a\r\rb"), ".-\n\n-...");
        assert_eq!(encode_text("a\r\nb"), ".-\n-...");
    }

    #[test]
    fn other_line_separators() {
        assert_eq!(encode_text("e\x0bt\u{2028}e"), ".\n-\n.");
        assert_eq!(encode_text("e\x1ft"), ".\n-");
    }

    #[test]
    fn split_lines_ignores_trailing_break() {
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn empty_text() {
        assert_eq!(encode_text(""), "");
    }
}
