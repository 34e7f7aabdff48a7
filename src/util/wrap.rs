//! Module implementing word wrapping of the caption text.
//!
//! Wrapping works on character counts rather than rendered widths.
//! The caller estimates how many characters fit in a line,
//! which makes the line breaks independent from the actual font metrics.

use regex::Regex;


/// Distance between tab stops when tabs are expanded into spaces.
const TAB_SIZE: usize = 8;

/// Characters that count as whitespace for the purpose of line breaking.
const WHITESPACE: &'static [char] = &['\t', '\n', '\x0b', '\x0c', '\r', ' '];


/// Break the text into lines that are at most `width` characters long.
///
/// Any whitespace (including newlines) is treated as a single space
/// and can be turned into a line break. Words longer than the whole line
/// are broken up, preferably after a hyphen.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let text: String = expand_tabs(text).chars()
        .map(|c| if WHITESPACE.contains(&c) { ' ' } else { c })
        .collect();

    let mut chunks = split_chunks(&text);
    trace!("Wrapping text of length {} with {} chunk(s) at {} character(s) per line",
        text.len(), chunks.len(), width);

    chunks.reverse();  // so that we can pop() them in order
    let mut lines: Vec<String> = vec![];
    while !chunks.is_empty() {
        let mut line: Vec<Vec<char>> = vec![];
        let mut line_len = 0;

        // Whitespace at the start of a line is dropped,
        // unless it's the very first line.
        if !lines.is_empty() && chunks.last().map_or(false, |c| is_blank(c)) {
            chunks.pop();
        }

        loop {
            let len = match chunks.last() {
                Some(chunk) => chunk.len(),
                None => break,
            };
            if line_len + len > width {
                break;
            }
            if let Some(chunk) = chunks.pop() {
                line.push(chunk);
                line_len += len;
            }
        }

        // If the next chunk couldn't fit even on an empty line,
        // it needs to be broken up.
        if chunks.last().map_or(false, |c| c.len() > width) {
            break_long_chunk(&mut chunks, &mut line, line_len, width);
        }

        // Trailing whitespace is dropped as well.
        if line.last().map_or(false, |c| is_blank(c)) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.into_iter().flat_map(|c| c.into_iter()).collect());
        }
    }
    lines
}


/// Split the text into chunks of either whitespace or words.
/// Hyphenated words are additionally split after their hyphens,
/// and dashes between words (`WORD--WORD`) become chunks of their own.
fn split_chunks(text: &str) -> Vec<Vec<char>> {
    lazy_static! {
        static ref CHUNK: Regex = Regex::new(r" +|[^ ]+").unwrap();
    }
    let mut result = vec![];
    for m in CHUNK.find_iter(text) {
        let chunk: Vec<char> = m.as_str().chars().collect();
        if is_blank(&chunk) {
            result.push(chunk);
        } else {
            split_word(&chunk, &mut result);
        }
    }
    result
}

/// Split a run of non-whitespace characters into word chunks.
fn split_word(run: &[char], result: &mut Vec<Vec<char>>) {
    let mut start = 0;
    while start < run.len() {
        // Dash between words goes on its own.
        if start > 0 && is_word_punct(run[start - 1]) {
            if let Some(len) = dash_before_word(run, start) {
                result.push(run[start..start + len].to_vec());
                start += len;
                continue;
            }
        }

        // Otherwise take the shortest piece that ends either after a hyphen
        // which can break the word, right before a dash, or at the end of the run.
        let mut end = start + 1;
        while end < run.len() {
            if is_hyphen_break(run, end) {
                end += 1;
                break;
            }
            if is_word_punct(run[end - 1]) && dash_before_word(run, end).is_some() {
                break;
            }
            end += 1;
        }
        result.push(run[start..end].to_vec());
        start = end;
    }
}

/// Length of the dash (two or more hyphens) starting at i-th character,
/// provided it's followed by a word character.
fn dash_before_word(run: &[char], i: usize) -> Option<usize> {
    let len = run[i..].iter().take_while(|&&c| c == '-').count();
    let followed = run.get(i + len).map_or(false, |&c| is_word(c));
    if len >= 2 && followed { Some(len) } else { None }
}

/// Whether a word can be broken after its i-th character.
///
/// This is the case for a hyphen that follows two letters (or a "letter-letter-"
/// sequence) and is followed by a letter, an optional hyphen, and another letter.
fn is_hyphen_break(word: &[char], i: usize) -> bool {
    let is_letter = |j: usize| word.get(j).map_or(false, |&c| c.is_alphabetic() || c == '_');
    let is_hyphen = |j: usize| word.get(j) == Some(&'-');

    if !is_hyphen(i) || i < 2 {
        return false;
    }
    let preceded = (is_letter(i - 1) && is_letter(i - 2))
        || (i >= 3 && is_letter(i - 1) && is_hyphen(i - 2) && is_letter(i - 3));
    let followed = is_letter(i + 1)
        && (is_letter(i + 2) || (is_hyphen(i + 2) && is_letter(i + 3)));
    preceded && followed
}

#[inline]
fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Characters that can precede a dash between words.
#[inline]
fn is_word_punct(c: char) -> bool {
    is_word(c) || "!\"'&.,?".contains(c)
}

/// Break up the next chunk so that its beginning fills the rest of current line.
fn break_long_chunk(chunks: &mut Vec<Vec<char>>, line: &mut Vec<Vec<char>>,
                    line_len: usize, width: usize) {
    let chunk = match chunks.pop() {
        Some(c) => c,
        None => return,
    };
    let space_left = width.saturating_sub(line_len);

    // Prefer to break after the last hyphen that fits, as long as
    // there is something other than hyphens before it.
    let mut end = space_left;
    if chunk.len() > space_left {
        let hyphen = chunk[..space_left].iter().rposition(|&c| c == '-');
        if let Some(h) = hyphen {
            if h > 0 && chunk[..h].iter().any(|&c| c != '-') {
                end = h + 1;
            }
        }
    }
    let end = end.min(chunk.len());

    line.push(chunk[..end].to_vec());
    chunks.push(chunk[end..].to_vec());
}

/// Expand tabs into spaces, using tab stops every `TAB_SIZE` columns.
fn expand_tabs(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let spaces = TAB_SIZE - column % TAB_SIZE;
                result.extend(std::iter::repeat(' ').take(spaces));
                column += spaces;
            }
            '\n' | '\r' => {
                result.push(c);
                column = 0;
            }
            c => {
                result.push(c);
                column += 1;
            }
        }
    }
    result
}

#[inline]
fn is_blank(chunk: &[char]) -> bool {
    chunk.iter().all(|&c| c == ' ')
}
