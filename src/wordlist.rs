//! Loading word lists from text files

use crate::Result;
use std::io::BufRead;
use std::path::Path;

/// Read a newline-separated word list
///
/// A trailing `\r` is stripped from each line and empty lines are skipped.
/// Words are otherwise kept byte-for-byte, including surrounding spaces.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file = std::fs::File::open(path.as_ref())?;
    read(std::io::BufReader::new(file))
}

/// Read a newline-separated word list from any buffered reader
pub fn read(reader: impl BufRead) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        if !line.is_empty() {
            words.push(line);
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::tempdir;

    #[test]
    fn test_read_skips_blank_and_strips_cr() {
        let input = "apple\r\nbanana\n\n cherry \n";
        let words = read(input.as_bytes()).unwrap();
        assert_eq!(words, vec!["apple", "banana", " cherry "]);
    }

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "b\na\nb\n").unwrap();

        assert_eq!(load(&path).unwrap(), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
