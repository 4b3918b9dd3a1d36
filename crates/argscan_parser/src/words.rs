use std::io;
use std::path::Path;

/// Reads the whitespace-separated words of a file, in order.
pub fn read_words(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn splits_on_any_whitespace() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "--count 3\n\t-v   input.txt\n").unwrap();
        assert_eq!(
            read_words(file.path()).unwrap(),
            vec!["--count", "3", "-v", "input.txt"]
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_words(dir.path().join("absent")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
