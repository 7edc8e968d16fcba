//! Script builder utility for generating properly indented CMake code.

/// One indentation level in generated scripts.
const INDENT: &str = "  ";

/// Fluent API for building CMake script text with proper indentation.
///
/// # Example
///
/// ```
/// use libdeps_export::ScriptBuilder;
///
/// let script = ScriptBuilder::new()
///     .block("if(WIN32)", |b| b.set("FOO", "bar;"))
///     .line("endif()")
///     .build();
///
/// assert_eq!(script, "if(WIN32)\n  set(\"FOO\" \"bar;\")\nendif()\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    indent_level: usize,
    buffer: String,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add a `# text` comment line.
    pub fn comment(mut self, text: &str) -> Self {
        self.write_indent();
        self.buffer.push_str("# ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Add a `set("<key>" "<value>")` line.
    ///
    /// Key and value are written verbatim.
    pub fn set(self, key: &str, value: &str) -> Self {
        self.line(&format!("set(\"{}\" \"{}\")", key, value))
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a header line followed by an indented body.
    ///
    /// The caller writes the closing line, so branches such as `else()`
    /// can follow directly.
    pub fn block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent()
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated script.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let script = ScriptBuilder::new().line("endif()").build();
        assert_eq!(script, "endif()\n");
    }

    #[test]
    fn test_comment_is_indented() {
        let script = ScriptBuilder::new()
            .comment("top")
            .indent()
            .comment("nested")
            .build();

        assert_eq!(script, "# top\n  # nested\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let script = ScriptBuilder::new().indent().blank().line("x").build();
        assert_eq!(script, "\n  x\n");
    }

    #[test]
    fn test_set_quotes_key_and_value() {
        let script = ScriptBuilder::new().set("a_LIB_DEPENDS", "b;").build();
        assert_eq!(script, "set(\"a_LIB_DEPENDS\" \"b;\")\n");
    }

    #[test]
    fn test_block_then_else() {
        let script = ScriptBuilder::new()
            .block("if(A)", |b| b.line("x()"))
            .block("else()", |b| b.line("y()"))
            .line("endif()")
            .build();

        assert_eq!(script, "if(A)\n  x()\nelse()\n  y()\nendif()\n");
    }

    #[test]
    fn test_each() {
        let script = ScriptBuilder::new()
            .each([("a", "1;"), ("b", "2;")], |b, (k, v)| b.set(k, v))
            .build();

        assert_eq!(script, "set(\"a\" \"1;\")\nset(\"b\" \"2;\")\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let script = ScriptBuilder::new().dedent().line("x").build();
        assert_eq!(script, "x\n");
    }
}
