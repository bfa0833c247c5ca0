//! Name transforms for guards, class names and file names.

/// How an identifier is broken into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// A new word starts at every uppercase letter (e.g., "FooBar" -> ["Foo", "Bar"])
    PascalCase,
    /// Words are separated by whitespace (e.g., "My  Test" -> ["My", "Test"])
    FreeText,
}

/// Split an identifier into words.
///
/// Existing whitespace always separates words, so a PascalCase identifier
/// containing spaces still splits at both. Empty input yields no words.
pub fn split_words(identifier: &str, mode: SplitMode) -> Vec<String> {
    match mode {
        SplitMode::PascalCase => {
            let mut spaced = String::with_capacity(identifier.len() * 2);
            for c in identifier.chars() {
                if c.is_ascii_uppercase() {
                    spaced.push(' ');
                }
                spaced.push(c);
            }
            spaced.split_whitespace().map(str::to_string).collect()
        }
        SplitMode::FreeText => identifier.split_whitespace().map(str::to_string).collect(),
    }
}

/// Build the include guard for a mock header (e.g., ["Foo", "Bar"] -> "MOCK_FOO_BAR_H")
pub fn macro_guard<S: AsRef<str>>(words: &[S]) -> String {
    let mut guard = String::from("MOCK");
    for word in words {
        guard.push('_');
        guard.push_str(&word.as_ref().to_uppercase());
    }
    guard.push_str("_H");
    guard
}

/// Prefix a class name with "Mock" (e.g., "FooBar" -> "MockFooBar")
pub fn mock_class_name(class: &str) -> String {
    format!("Mock{}", class)
}

/// Build a test file stem (e.g., ["My", "Test"] -> "test_my_test")
pub fn test_file_stem<S: AsRef<str>>(words: &[S]) -> String {
    let mut stem = String::from("test");
    for word in words {
        stem.push('_');
        stem.push_str(&word.as_ref().to_lowercase());
    }
    stem
}
