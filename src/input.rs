use anyhow::{Result, anyhow};
use std::fs;
use std::io::Read;

/// Reads the entire contents of the named file into memory.
pub fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| anyhow!("could not read {path}: {e}"))
}

/// Drains standard input into memory.
pub fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| anyhow!("could not read stdin: {e}"))?;
    Ok(buf)
}
