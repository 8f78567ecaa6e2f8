use crate::GraphQLSource;
use crate::SourceLocation;

/// A syntax error raised during lexing or parsing.
///
/// This is the sole error kind the parser emits. It pins the first
/// offending token's byte offset, carries the derived line/column, and
/// pre-renders a diagnostic with a source excerpt and caret marker.
///
/// The error is self-contained (it owns the excerpt it renders), so it
/// can outlive both the source text and the parser that produced it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{formatted}")]
pub struct GraphQLSyntaxError {
    /// The primary error message, e.g. `Expected :, found Name "x"`.
    message: String,

    /// The name of the source the error occurred in.
    source_name: String,

    /// Byte offset of the first offending token.
    position: usize,

    /// Line/column derived from `position`, shifted by the source's
    /// location offset.
    location: SourceLocation,

    /// Pre-rendered diagnostic with source excerpt and caret.
    formatted: String,
}

impl GraphQLSyntaxError {
    /// Creates a syntax error pinned to `position` within `source`.
    pub fn new(
        source: &GraphQLSource<'_>,
        position: usize,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        let location = SourceLocation::from_offset(source, position);
        let formatted = format_with_excerpt(source, position, location, &message);
        Self {
            message,
            source_name: source.name().to_string(),
            position,
            location,
            formatted,
        }
    }

    /// Returns the primary error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the name of the source the error occurred in.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Returns the byte offset of the first offending token.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the derived line/column of the error.
    pub fn location(&self) -> SourceLocation {
        self.location
    }
}

/// Renders the diagnostic header plus a source excerpt with a caret
/// under the error column.
///
/// Produces output like:
/// ```text
/// Syntax Error: Expected :, found Name "x"
///   --> GraphQL:1:7
///    |
///  1 | { foo x }
///    |       ^
/// ```
fn format_with_excerpt(
    source: &GraphQLSource<'_>,
    position: usize,
    location: SourceLocation,
    message: &str,
) -> String {
    let mut output = String::new();

    output.push_str("Syntax Error: ");
    output.push_str(message);
    output.push('\n');
    output.push_str(&format!(
        "  --> {}:{}:{}\n",
        source.name(),
        location.line,
        location.column,
    ));

    // The excerpt indexes into the raw body, so derive the unshifted
    // position (the header above already carries the shifted one).
    let raw = SourceLocation::from_offset_in_body(source.body(), position);
    let lines: Vec<&str> = source.body().lines().collect();
    if raw.line > lines.len() && !(raw.line == 1 && lines.is_empty()) {
        return output;
    }
    let line_content = if lines.is_empty() { "" } else { lines[raw.line - 1] };
    let line_num_width = raw.line.to_string().len().max(2);

    output.push_str(&format!("{:>line_num_width$} |\n", ""));
    output.push_str(&format!("{:>line_num_width$} | {line_content}\n", raw.line));
    output.push_str(&format!(
        "{:>line_num_width$} | {:>padding$}^\n",
        "",
        "",
        padding = raw.column - 1,
    ));

    output
}
