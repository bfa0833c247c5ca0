use std::path::{Path, PathBuf};

use emugen_core::{
    FileRules, GeneratedFile, Overwrite, SplitMode, paths::TEST_EXTENSION, split_words,
    test_file_stem,
};

use crate::builder::CodeBuilder;

/// An empty Unity test harness that runs on the device and on the host
pub struct TestStub {
    name: String,
}

impl TestStub {
    /// Create a stub from a free-text test name (e.g., "My Test")
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// File name without directory (e.g., "My Test" -> "test_my_test.cpp")
    pub fn file_name(&self) -> String {
        let words = split_words(&self.name, SplitMode::FreeText);
        format!("{}.{}", test_file_stem(&words), TEST_EXTENSION)
    }
}

impl GeneratedFile for TestStub {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
        }
    }

    fn render(&self) -> String {
        CodeBuilder::cpp()
            .line("// #define EMULATOR_LOG")
            .blank()
            .line("#include <emulation.h>")
            .blank()
            .line("void setUp(void) {}")
            .blank()
            .line("void tearDown(void) {}")
            .blank()
            .block_with_close("void runTests() {", "}", |b| {
                b.line("UNITY_BEGIN();")
                    .line("// TODO add tests")
                    .line("UNITY_END();")
            })
            .blank()
            .line("#if defined(ARDUINO)")
            .line("#include <Arduino.h>")
            .blank()
            .block_with_close("void setup() {", "}", |b| b.line("runTests();"))
            .blank()
            .line("void loop() {}")
            .blank()
            .line("#else")
            .blank()
            .block_with_close("int main(int argc, char **argv) {", "}", |b| {
                b.line("runTests();").line("return 0;")
            })
            .blank()
            .line("#endif")
            .build()
    }
}
