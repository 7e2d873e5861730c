//! File-or-stdin text loading for CLI commands.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read input text from a file, or from stdin when no file is given.
pub fn read_text(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"some document text").unwrap();
        assert_eq!(read_text(Some(file.path())).unwrap(), "some document text");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_text(Some(Path::new("/nonexistent/input.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }
}
