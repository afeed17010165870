//! Reading command input and rendering output.

use draftkit_core::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Path argument meaning standard input.
pub const STDIN: &str = "-";

/// Read a whole input, from stdin when `source` is `-`.
pub fn read_input(source: &str) -> Result<String> {
    if source == STDIN {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(source).map_err(|e| io_with_path(e, Path::new(source)))
}

/// Read an input and parse it as JSON.
pub fn read_json(source: &str) -> Result<Value> {
    let text = read_input(source)?;
    serde_json::from_str(&text).map_err(|e| Error::malformed(format!("{source}: {e}")))
}

/// Write text to a file, naming the file in any error.
pub fn write_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| io_with_path(e, parent))?;
    }
    std::fs::write(path, text).map_err(|e| io_with_path(e, path))
}

/// Render a value as JSON text.
pub fn render(value: &impl Serialize, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

/// An I/O error that names the path it happened on.
pub fn io_with_path(err: std::io::Error, path: &Path) -> Error {
    Error::Io(std::io::Error::new(
        err.kind(),
        format!("{}: {err}", path.display()),
    ))
}
