//! Path constants for generated files.
//!
//! Directories are relative to the project root.

/// Mock headers directory relative to project root.
pub const MOCKS_DIR: &str = "lib/Emulation/Mocks";

/// Test sources directory relative to project root.
pub const TESTS_DIR: &str = "test";

/// File extension for mock headers.
pub const MOCK_EXTENSION: &str = "hpp";

/// File extension for test sources.
pub const TEST_EXTENSION: &str = "cpp";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(MOCKS_DIR, "lib/Emulation/Mocks");
        assert_eq!(TESTS_DIR, "test");
        assert_eq!(MOCK_EXTENSION, "hpp");
        assert_eq!(TEST_EXTENSION, "cpp");
    }
}
