use super::token::{Token, TokenKind};

const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".svg", ".webp"];

/// Code points at or above this are treated as pictographic/emoji.
const PICTOGRAPHIC_FLOOR: u32 = 0x1F000;

fn is_image_token(raw: &str) -> bool {
    let lower = raw.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

fn is_icon_token(raw: &str) -> bool {
    raw.chars().any(|c| c as u32 >= PICTOGRAPHIC_FLOOR)
}

/// Classify a sub-token that is not a highlight or bold span.
/// Image wins over Icon, Icon over Word.
fn classify_plain(raw: &str) -> TokenKind {
    if is_image_token(raw) {
        TokenKind::Image
    } else if is_icon_token(raw) {
        TokenKind::Icon
    } else {
        TokenKind::Word
    }
}

/// Accumulates `==...==` and `**...**` spans across whitespace-delimited
/// sub-tokens within one line.
///
/// A sub-token that both opens and closes a span is emitted immediately. An
/// open span absorbs subsequent sub-tokens (joined by single spaces) until
/// one ends with the matching delimiter. A span still open when the line ends
/// is flushed as-is and classified like a plain sub-token; stray delimiters
/// are never an error.
fn split_line_spans(line: &str) -> Vec<(String, TokenKind)> {
    let mut out: Vec<(String, TokenKind)> = Vec::new();
    let mut current = String::new();
    let mut in_bold = false;
    let mut in_highlight = false;

    for sub in line.trim().split_whitespace() {
        if sub.starts_with("==") && sub.ends_with("==") && sub.len() > 4 {
            out.push((sub.to_string(), TokenKind::Highlight));
        } else if sub.starts_with("==") && !in_highlight && !in_bold {
            in_highlight = true;
            current = sub.to_string();
        } else if sub.ends_with("==") && sub.len() >= 3 && in_highlight {
            current.push(' ');
            current.push_str(sub);
            out.push((std::mem::take(&mut current), TokenKind::Highlight));
            in_highlight = false;
        } else if in_highlight {
            current.push(' ');
            current.push_str(sub);
        } else if sub.starts_with("**") && sub.ends_with("**") && sub.len() > 4 {
            out.push((sub.to_string(), TokenKind::Bold));
        } else if sub.starts_with("**") && !in_bold && !in_highlight {
            in_bold = true;
            current = sub.to_string();
        } else if sub.ends_with("**") && sub.len() >= 3 && in_bold {
            current.push(' ');
            current.push_str(sub);
            out.push((std::mem::take(&mut current), TokenKind::Bold));
            in_bold = false;
        } else if in_bold {
            current.push(' ');
            current.push_str(sub);
        } else {
            out.push((sub.to_string(), classify_plain(sub)));
        }
    }

    // Unclosed span at end of line: flush rather than drop, classified as
    // plain text. Not a supported syntax, just lenient degradation.
    if !current.is_empty() {
        let kind = classify_plain(&current);
        out.push((current, kind));
    }

    out
}

/// Tokenize freeform annotated narrative text into the flat, globally
/// indexed reveal sequence.
///
/// Lines are the text split on runs of newlines, blank lines dropped. Never
/// fails; malformed annotation degrades per `split_line_spans`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut global_index = 0;

    let lines = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty());

    for (line_index, line) in lines.enumerate() {
        for (ordinal_in_line, (raw, kind)) in split_line_spans(line).into_iter().enumerate() {
            tokens.push(Token {
                raw,
                kind,
                line_index,
                ordinal_in_line,
                global_index,
            });
            global_index += 1;
        }
    }

    tokens
}
