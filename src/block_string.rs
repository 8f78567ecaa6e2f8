//! Block string value processing.

use std::borrow::Cow;

/// Produces the semantic value of a raw block-string body.
///
/// Implements the `BlockStringValue` algorithm from the GraphQL spec:
/// the common indentation of every line after the first is stripped,
/// then leading and trailing blank lines are removed, and the remaining
/// lines are joined with `\n`.
///
/// Returns a borrowed `Cow` when the algorithm leaves the input
/// unchanged (single-line block strings, or bodies that are already
/// flush-left with no surrounding blank lines).
pub fn block_string_value(raw: &str) -> Cow<'_, str> {
    let lines: Vec<&str> = split_lines(raw).collect();

    // Common indentation across all lines but the first, ignoring
    // lines that are entirely whitespace.
    let mut common_indent: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let indent = leading_whitespace(line);
        if indent < line.len() {
            match common_indent {
                Some(current) if indent >= current => {}
                _ => common_indent = Some(indent),
            }
            if common_indent == Some(0) {
                break;
            }
        }
    }

    let stripped: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                *line
            } else {
                let indent = common_indent.unwrap_or(0);
                &line[indent.min(line.len())..]
            }
        })
        .collect();

    let is_blank = |line: &&str| leading_whitespace(line) == line.len();
    let first = stripped.iter().position(|l| !is_blank(l));
    let Some(first) = first else {
        // Every line is blank.
        return Cow::Borrowed("");
    };
    let last = stripped.iter().rposition(|l| !is_blank(l)).unwrap_or(first);

    let value = stripped[first..=last].join("\n");
    if value == raw {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(value)
    }
}

/// Splits on the GraphQL line terminators `\n`, `\r\n`, and lone `\r`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(index) => {
                let line = &rest[..index];
                let after = if rest[index..].starts_with("\r\n") {
                    index + 2
                } else {
                    index + 1
                };
                rest = &rest[after..];
                Some(line)
            }
            None => {
                done = true;
                Some(rest)
            }
        }
    })
}

/// Counts the leading space/tab characters of a line.
fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}
