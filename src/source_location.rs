use crate::GraphQLSource;

/// A line/column position within a source body.
///
/// # Indexing Convention
///
/// **Both values are 1-based:** the first character of a document is at
/// `{line: 1, column: 1}`. Columns count characters, not bytes, so a
/// multi-byte character still advances the column by 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourceLocation {
    /// Line number (1-based: first line is 1).
    pub line: usize,

    /// Character column within the line (1-based: first column is 1).
    pub column: usize,
}

impl SourceLocation {
    /// Creates a new `SourceLocation`.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Derives the line/column of a byte offset within `source`,
    /// shifted by the source's
    /// [`location_offset`](GraphQLSource::location_offset).
    ///
    /// The offset shift applies to every line number, and to the column
    /// only on the first line (subsequent lines start at the host
    /// document's own margin).
    pub fn from_offset(source: &GraphQLSource<'_>, position: usize) -> Self {
        let raw = Self::from_offset_in_body(source.body(), position);
        let offset = source.location_offset();
        let column = if raw.line == 1 {
            raw.column + offset.column - 1
        } else {
            raw.column
        };
        Self {
            line: raw.line + offset.line - 1,
            column,
        }
    }

    /// Derives the raw (unshifted) line/column of a byte offset within
    /// `body`.
    ///
    /// Line terminators are `\n`, `\r\n`, and a lone `\r`, matching the
    /// GraphQL lexical grammar. Offsets past the end of the body resolve
    /// to the position just past the final character.
    pub(crate) fn from_offset_in_body(body: &str, position: usize) -> Self {
        let position = position.min(body.len());
        let mut line = 1;
        let mut column = 1;
        let mut chars = body.char_indices().peekable();
        while let Some((index, ch)) = chars.next() {
            if index >= position {
                break;
            }
            match ch {
                '\n' => {
                    line += 1;
                    column = 1;
                }
                '\r' => {
                    // \r\n counts as a single terminator
                    if let Some((_, '\n')) = chars.peek() {
                        chars.next();
                    }
                    line += 1;
                    column = 1;
                }
                _ => column += 1,
            }
        }
        Self { line, column }
    }
}
