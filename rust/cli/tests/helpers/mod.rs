//! Shared helpers for the CLI integration tests.
//!
//! `CliRunner` drives [`blackjack_cli::run_with_input`] in-process with a
//! scripted stdin and captures stdout, stderr and the exit code. Tests that
//! touch the environment must be `#[serial]`.

use std::io::Cursor;
use std::path::PathBuf;

use blackjack_cli::config::{CONFIG_ENV, HOUSE_NAME_ENV, SEED_ENV};
use tempfile::TempDir;

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[allow(dead_code)]
impl CliResult {
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply(pairs: &[(&str, Option<&str>)]) -> Self {
        let mut restores = Vec::new();
        for (key, value) in pairs {
            restores.push((key.to_string(), std::env::var(key).ok()));
            // SAFETY: callers are serialized with #[serial]
            unsafe {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            // SAFETY: see EnvGuard::apply
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct CliRunner {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl CliRunner {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Runs with every blackjack variable cleared.
    pub fn run(&self, args: &[&str], stdin: &str) -> CliResult {
        self.run_with_env(args, &[], stdin)
    }

    /// Runs with every blackjack variable cleared except those in `env`.
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)], stdin: &str) -> CliResult {
        let mut pairs: Vec<(&str, Option<&str>)> = vec![
            (CONFIG_ENV, None),
            (SEED_ENV, None),
            (HOUSE_NAME_ENV, None),
        ];
        pairs.extend(env.iter().map(|(k, v)| (*k, Some(*v))));
        let _guard = EnvGuard::apply(&pairs);

        let argv = std::iter::once("blackjack").chain(args.iter().copied());
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let exit_code = blackjack_cli::run_with_input(argv, &mut input, &mut out, &mut err);
        CliResult {
            exit_code,
            stdout: String::from_utf8_lossy(&out).into_owned(),
            stderr: String::from_utf8_lossy(&err).into_owned(),
        }
    }

    /// Writes a config file inside the runner's temporary directory.
    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join("blackjack.toml");
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
