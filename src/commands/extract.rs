//! Extract command handler.

use crate::criteria;
use crate::error::{CasegenError, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Extract the acceptance-criteria section from a file (or stdin) and print
/// it.
///
/// Exits nonzero when no section is found so scripts can branch on the
/// result.
pub fn extract_command(file: Option<&Path>) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    match criteria::extract(&text) {
        Some(section) => {
            println!("{}", section);
            Ok(())
        }
        None => Err(CasegenError::NoAcceptanceCriteria),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_extract_from_file_succeeds() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Acceptance criteria:\n- works\n").unwrap();
        assert!(extract_command(Some(file.path())).is_ok());
    }

    #[test]
    fn test_extract_without_signal_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "just a description").unwrap();
        assert!(matches!(
            extract_command(Some(file.path())),
            Err(CasegenError::NoAcceptanceCriteria)
        ));
    }

    #[test]
    fn test_extract_missing_file_is_io_error() {
        let result = extract_command(Some(Path::new("/nonexistent/input.txt")));
        assert!(matches!(result, Err(CasegenError::Io(_))));
    }
}
