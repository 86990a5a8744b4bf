//! Compile-time limits
//!
//! Process-wide constants enforced during file processing, lexical analysis,
//! and syntax analysis. There is no runtime configuration surface; the
//! grammar and keyword tables are fixed at build time.

pub mod compile_time {
    /// Limits applied while reading source files
    pub mod file_processing {
        /// Maximum source file size in bytes (1 MiB)
        pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

        /// Accepted source file extensions
        pub const ALLOWED_EXTENSIONS: &[&str] = &["pl0", "pas"];
    }

    /// Limits applied during lexical analysis
    pub mod lexical {
        /// Maximum identifier length in characters
        pub const MAX_IDENTIFIER_LENGTH: usize = 255;

        /// Maximum numeric literal length in characters
        pub const MAX_NUMBER_LENGTH: usize = 64;

        /// Maximum length of a single string literal
        pub const MAX_STRING_LENGTH: usize = 4096;

        /// Maximum length of a single comment body
        pub const MAX_COMMENT_LENGTH: usize = 16384;

        /// Maximum number of tokens per file
        pub const MAX_TOKEN_COUNT: usize = 1_000_000;
    }

    /// Limits applied during syntax analysis
    pub mod syntax {
        /// Maximum recursion depth of the recursive-descent parser.
        /// Bounds nesting of procedures, compound statements, and
        /// parenthesized expressions.
        pub const MAX_PARSE_DEPTH: usize = 128;
    }
}
