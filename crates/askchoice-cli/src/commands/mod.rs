//! CLI command implementations

pub mod ask;
pub mod reconcile;
pub mod validate;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read a file, or stdin when `path` is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Reading from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Reading '{}'", path.display()))
}
