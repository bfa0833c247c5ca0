//! Code builder utility for generating properly indented code.

/// One indent level in every emitted C++ template.
const INDENT: &str = "\t";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use emugen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::cpp()
///     .line("void setup() {")
///     .indent()
///     .line("runTests();")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "void setup() {\n\trunTests();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with tab indentation.
    pub fn cpp() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
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

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use emugen_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::cpp()
    ///     .block_with_close("int main() {", "}", |b: CodeBuilder| {
    ///         b.line("return 0;")
    ///     })
    ///     .build();
    ///
    /// assert_eq!(code, "int main() {\n\treturn 0;\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
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

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::cpp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::cpp().line("#endif").build();
        assert_eq!(code, "#endif\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::cpp()
            .line("public:")
            .indent()
            .line("Foo() {}")
            .dedent()
            .line("};")
            .build();

        assert_eq!(code, "public:\n\tFoo() {}\n};\n");
    }

    #[test]
    fn test_nested_blocks() {
        let code = CodeBuilder::cpp()
            .block_with_close("{", "}", |b| b.block_with_close("{", "}", |b| b.line("x;")))
            .build();

        assert_eq!(code, "{\n\t{\n\t\tx;\n\t}\n}\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let code = CodeBuilder::cpp()
            .indent()
            .line("a;")
            .blank()
            .line("b;")
            .build();

        assert_eq!(code, "\ta;\n\n\tb;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::cpp().dedent().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::cpp()
            .each(["Arduino.h", "Emulator.h"], |b, h| {
                b.line(&format!("#include <{}>", h))
            })
            .build();

        assert_eq!(code, "#include <Arduino.h>\n#include <Emulator.h>\n");
    }
}
