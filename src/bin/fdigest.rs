use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, warn};

use cryptal_digest::hash::{sha1, sha256};
use cryptal_digest::{Sha1Digest, Sha256Digest};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Sha1,
    Sha256,
}

impl Algorithm {
    fn digest_file(self, path: &Path) -> cryptal_digest::Result<String> {
        Ok(match self {
            Self::Sha1 => sha1::compute_from_file(path)?.to_hex(),
            Self::Sha256 => sha256::compute_from_file(path)?.to_hex(),
        })
    }

    fn matches(self, expected: &str, path: &Path) -> cryptal_digest::Result<bool> {
        Ok(match self {
            Self::Sha1 => sha1::compute_from_file(path)? == Sha1Digest::from_hex(expected)?,
            Self::Sha256 => sha256::compute_from_file(path)? == Sha256Digest::from_hex(expected)?,
        })
    }
}

#[derive(Debug, Parser)]
#[command(name = "fdigest", version = env!("CARGO_PKG_VERSION"), about = "Compute or verify SHA-1 and SHA-256 file digests")]
struct App {
    #[arg(short, long, value_enum, default_value_t = Algorithm::Sha256)]
    algorithm: Algorithm,

    /// Read digests from the given lists and verify them
    #[arg(short, long)]
    check: bool,

    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let app = App::parse();
    debug!("{app:?}");

    let result = if app.check {
        app.files
            .iter()
            .try_fold(true, |ok, list| Ok::<_, anyhow::Error>(check_list(app.algorithm, list)? && ok))
    } else {
        Ok(app
            .files
            .iter()
            .fold(true, |ok, path| print_digest(app.algorithm, path) && ok))
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("fdigest: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_digest(algorithm: Algorithm, path: &Path) -> bool {
    match algorithm.digest_file(path) {
        Ok(hex) => {
            println!("{hex}  {}", path.display());
            true
        }
        Err(e) => {
            eprintln!("fdigest: {}: {e}", path.display());
            false
        }
    }
}

/// Verifies every `<hex>  <path>` line of `list`.
fn check_list(algorithm: Algorithm, list: &Path) -> Result<bool> {
    let content = fs::read_to_string(list)
        .with_context(|| format!("failed to read digest list '{}'", list.display()))?;

    let mut failures = 0usize;

    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let Some((expected, path)) = split_line(line) else {
            warn!("{}:{}: improperly formatted line", list.display(), number + 1);
            failures += 1;
            continue;
        };

        match algorithm.matches(expected, Path::new(path)) {
            Ok(true) => println!("{path}: OK"),
            Ok(false) => {
                println!("{path}: FAILED");
                failures += 1;
            }
            Err(e) => {
                println!("{path}: FAILED ({e})");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("fdigest: {failures} of the listed entries did not verify");
    }

    Ok(failures == 0)
}

/// Splits `<hex>  <path>` (or `<hex> *<path>`) into its two parts.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let (hex, rest) = line.split_once(' ')?;
    let path = rest.strip_prefix(' ').or_else(|| rest.strip_prefix('*'))?;

    (!hex.is_empty() && !path.is_empty()).then_some((hex, path))
}
