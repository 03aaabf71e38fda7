//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::constants;

/// Upload .env secrets to a GitHub repository.
///
/// If the env file is not found, enters interactive mode.
#[derive(Parser, Debug)]
#[command(name = "env-secrets", version, about, long_about = None)]
pub struct Cli {
    /// Target repository in owner/repo form (prompted for if omitted).
    pub repo: Option<String>,

    /// Path to .env file.
    #[arg(short = 'f', long, default_value = constants::env_file::DEFAULT_PATH)]
    pub env_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["env-secrets"]);
        assert_eq!(cli.repo, None);
        assert_eq!(cli.env_file, PathBuf::from(".env"));
    }

    #[test]
    fn test_repo_and_env_file() {
        let cli = Cli::parse_from(["env-secrets", "owner/repo", "-f", "prod.env"]);
        assert_eq!(cli.repo.as_deref(), Some("owner/repo"));
        assert_eq!(cli.env_file, PathBuf::from("prod.env"));
    }

    #[test]
    fn test_env_file_long_flag() {
        let cli = Cli::parse_from(["env-secrets", "--env-file", "/tmp/.env"]);
        assert_eq!(cli.env_file, PathBuf::from("/tmp/.env"));
    }
}
