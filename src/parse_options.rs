/// Options controlling parser output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// When `true`, AST nodes are produced without their `loc` field.
    ///
    /// Disabling location tracking skips the per-node token and source
    /// clones, which is useful when the AST will be transferred or
    /// cached and byte offsets are not needed.
    pub no_location: bool,
}

impl ParseOptions {
    /// Options with location tracking disabled.
    pub fn without_locations() -> Self {
        Self { no_location: true }
    }
}
