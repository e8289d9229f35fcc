//! Sentence and word boundaries for plain English text.

use wordhoard_core::Token;

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split `text` into sentences.
///
/// A sentence is a run of non-terminator characters followed by one or more
/// of `.`, `!`, `?`. Stray terminators with no preceding text are dropped, as
/// is an unterminated tail after the last sentence. Text with no complete
/// sentence at all is returned whole, untrimmed.
pub fn segment(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminator(c) {
            start.get_or_insert(i);
            continue;
        }

        let Some(begin) = start.take() else {
            continue;
        };

        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if !is_terminator(next) {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }
        sentences.push(&text[begin..end]);
    }

    if sentences.is_empty() {
        sentences.push(text);
    }
    sentences
}

/// Lowercase `sentence` and pull out every standalone run of `a`-`z`.
///
/// A run touching a digit or underscore is not a standalone word and is
/// skipped along with it; any other character just separates words.
pub fn tokenize(sentence: &str) -> Vec<Token> {
    let lowered = sentence.to_lowercase();
    let mut tokens = Vec::new();
    let mut run_start: Option<usize> = None;
    // Whether the current run is glued to a word character on its left
    let mut glued = false;
    let mut prev: Option<char> = None;

    for (i, c) in lowered.char_indices() {
        if c.is_ascii_lowercase() {
            if run_start.is_none() {
                run_start = Some(i);
                glued = prev.is_some_and(is_word_char);
            }
        } else if let Some(start) = run_start.take() {
            if !glued && !is_word_char(c) {
                tokens.push(Token {
                    text: lowered[start..i].to_string(),
                    position: start,
                });
            }
        }
        prev = Some(c);
    }

    if let Some(start) = run_start {
        if !glued {
            tokens.push(Token {
                text: lowered[start..].to_string(),
                position: start,
            });
        }
    }

    tokens
}
