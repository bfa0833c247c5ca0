use std::path::{Path, PathBuf};

use emugen_core::{
    FileRules, GeneratedFile, Overwrite, SplitMode, macro_guard, mock_class_name,
    paths::MOCK_EXTENSION, split_words,
};

use crate::builder::CodeBuilder;

/// Class every generated mock inherits from.
pub const MOCK_BASE_CLASS: &str = "Emulator";

const MOCK_INCLUDES: [&str; 2] = ["Arduino.h", "Emulator.h"];

/// An empty mock class header for a PascalCase class name
pub struct MockHeader {
    class: String,
}

impl MockHeader {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }

    /// The generated class name (e.g., "FooBar" -> "MockFooBar")
    pub fn class_name(&self) -> String {
        mock_class_name(&self.class)
    }

    /// The include guard (e.g., "FooBar" -> "MOCK_FOO_BAR_H")
    pub fn guard(&self) -> String {
        macro_guard(&split_words(&self.class, SplitMode::PascalCase))
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.class_name(), MOCK_EXTENSION)
    }
}

impl GeneratedFile for MockHeader {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::Always,
        }
    }

    fn render(&self) -> String {
        let guard = self.guard();
        let class = self.class_name();

        CodeBuilder::cpp()
            .line(&format!("#if not defined({})", guard))
            .line(&format!("#define {}", guard))
            .blank()
            .each(MOCK_INCLUDES, |b, header| {
                b.line(&format!("#include <{}>", header))
            })
            .blank()
            .line(&format!("class {} : public {} {{", class, MOCK_BASE_CLASS))
            .line("public:")
            .indent()
            .line(&format!("{}() {{}}", class))
            .line(&format!("~{}() {{}}", class))
            .dedent()
            .blank()
            .line("protected:")
            .blank()
            .line("private:")
            .blank()
            .line("};")
            .blank()
            .line("#endif")
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let header = MockHeader::new("TinyGsm");
        assert_eq!(header.class_name(), "MockTinyGsm");
        assert_eq!(header.guard(), "MOCK_TINY_GSM_H");
        assert_eq!(header.file_name(), "MockTinyGsm.hpp");
        assert_eq!(
            header.path(Path::new("lib/Emulation/Mocks")),
            PathBuf::from("lib/Emulation/Mocks/MockTinyGsm.hpp")
        );
    }

    #[test]
    fn test_render() {
        let content = MockHeader::new("FooBar").render();

        assert_eq!(
            content,
            "#if not defined(MOCK_FOO_BAR_H)\n\
             #define MOCK_FOO_BAR_H\n\
             \n\
             #include <Arduino.h>\n\
             #include <Emulator.h>\n\
             \n\
             class MockFooBar : public Emulator {\n\
             public:\n\
             \tMockFooBar() {}\n\
             \t~MockFooBar() {}\n\
             \n\
             protected:\n\
             \n\
             private:\n\
             \n\
             };\n\
             \n\
             #endif\n"
        );
    }

    #[test]
    fn test_render_empty_class() {
        let content = MockHeader::new("").render();
        assert!(content.starts_with("#if not defined(MOCK_H)\n#define MOCK_H\n"));
        assert!(content.contains("class Mock : public Emulator {\n"));
    }

    #[test]
    fn test_always_overwrites() {
        assert_eq!(MockHeader::new("X").rules().overwrite, Overwrite::Always);
    }
}
