//! Application constants for the env file format, the `gh` CLI, and prompts.

/// Env file format constants.
pub mod env_file {
    /// Default env file path, relative to the current directory.
    pub const DEFAULT_PATH: &str = ".env";

    /// Lines starting with this character are comments.
    pub const COMMENT_PREFIX: char = '#';

    /// Substring removed from keys wherever it occurs (not just as a prefix).
    pub const EXPORT_MARKER: &str = "export ";
}

/// External `gh` CLI constants.
pub mod gh {
    /// Program name resolved on PATH.
    pub const PROGRAM: &str = "gh";
}

/// Prompt labels shown to the operator.
pub mod prompt {
    /// Label for the repository prompt.
    pub const REPO: &str = "Enter target repo (owner/repo)";

    /// Label for the secret key prompt.
    pub const SECRET_KEY: &str = "Secret key";
}
