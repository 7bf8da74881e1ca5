//! CLI command handlers.

pub mod auth;
pub mod config;
pub mod nav;
pub mod shell;
pub mod signup;
pub mod usage;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Returns `value`, or the first line of stdin when it is absent.
pub(crate) async fn password_or_stdin(value: Option<String>) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
