//! Mode selection and the upload loop.
//!
//! The orchestrator picks one of two modes at startup and drives the
//! per-key upload loop, reporting each outcome as it happens. Individual
//! upload failures are printed and skipped past; they never abort the run
//! or change the process exit code.

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::app_deps::{PromptInterface, RealPrompt, RealSecretStore, SecretStore};
use crate::cli::Cli;
use crate::env_file::EnvEntries;
use crate::error::format_error_chain;

/// How secrets are sourced for this run, decided once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Read pairs from the env file at this path.
    File(PathBuf),
    /// Prompt the operator for pairs until a blank key.
    Interactive,
}

impl Mode {
    /// Pick the mode for the given env file path.
    pub fn detect(env_file: &Path) -> Self {
        if env_file.is_file() {
            Mode::File(PathBuf::from(env_file))
        } else {
            Mode::Interactive
        }
    }
}

pub struct App;

impl App {
    /// Run with the real `gh`-backed store and terminal prompts.
    pub async fn run(cli: Cli) -> Result<()> {
        let store = RealSecretStore::new();
        let prompt = RealPrompt;
        Self::run_with_deps(&store, &prompt, cli.repo, &cli.env_file).await
    }

    /// Run with injected dependencies. This is the whole program minus
    /// construction of the real collaborators.
    pub async fn run_with_deps(
        store: &dyn SecretStore,
        prompt: &dyn PromptInterface,
        repo: Option<String>,
        env_file: &Path,
    ) -> Result<()> {
        match Mode::detect(env_file) {
            Mode::File(path) => Self::run_file_mode(store, prompt, repo, &path).await,
            Mode::Interactive => Self::run_interactive_mode(store, prompt, repo, env_file).await,
        }
    }

    async fn run_file_mode(
        store: &dyn SecretStore,
        prompt: &dyn PromptInterface,
        repo: Option<String>,
        path: &Path,
    ) -> Result<()> {
        let repo = match repo {
            Some(repo) => repo,
            None => prompt.prompt_repo()?,
        };

        println!(
            "{}",
            format!("Loading secrets from {} into {}...", path.display(), repo).green()
        );

        // Stream: each pair is uploaded as it is parsed, no rollback.
        for entry in EnvEntries::open(path)? {
            let entry = entry?;
            Self::upload_one(store, &repo, &entry.key, &entry.value).await;
        }

        Ok(())
    }

    async fn run_interactive_mode(
        store: &dyn SecretStore,
        prompt: &dyn PromptInterface,
        repo: Option<String>,
        env_file: &Path,
    ) -> Result<()> {
        println!(
            "{}",
            format!("No {} file found.", env_file.display()).yellow()
        );

        let repo = match repo {
            Some(repo) => repo,
            None => prompt.prompt_repo()?,
        };

        println!(
            "{}",
            "Entering interactive mode. Leave key blank to finish.".cyan()
        );

        loop {
            let key = prompt.prompt_secret_key()?;
            if key.is_empty() {
                break;
            }
            let value = prompt.prompt_secret_value(&key)?;
            Self::upload_one(store, &repo, &key, &value).await;
        }

        println!("{}", "Done setting secrets interactively.".green());
        Ok(())
    }

    /// Upload one pair and report the outcome immediately.
    async fn upload_one(store: &dyn SecretStore, repo: &str, key: &str, value: &str) {
        match store.set_secret(repo, key, value).await {
            Ok(()) => println!("Set secret: {}", key),
            Err(err) => {
                let err = anyhow::Error::new(err);
                println!(
                    "{}",
                    format!("Error setting secret {}: {}", key, format_error_chain(&err)).red()
                );
            }
        }
    }
}
