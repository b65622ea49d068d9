//*** START FILE: src/dict_io.rs ***//
use crate::dictionary::Dictionary;
use crate::error::{DictError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the dictionary as indented JSON (two spaces, non-ASCII kept verbatim).
/// Missing parent directories are created; the target is replaced atomically.
pub fn save_dictionary(dictionary: &Dictionary, file_path: &Path) -> Result<()> {
    let parent_dir = match file_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| DictError::io(parent_dir, e))?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| DictError::io(parent_dir, e))?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, dictionary)
            .map_err(|e| DictError::io(file_path, e.into()))?;
        writer.flush().map_err(|e| DictError::io(file_path, e))?;
    }
    temp_file
        .persist(file_path)
        .map_err(|e| DictError::io(file_path, e.error))?;
    Ok(())
}

/// Loads a dictionary previously written by [`save_dictionary`] (or any JSON
/// object of string to string).
pub fn load_dictionary(file_path: &Path) -> Result<Dictionary> {
    let file = File::open(file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DictError::InputMissing {
            path: file_path.to_path_buf(),
        },
        _ => DictError::io(file_path, e),
    })?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| DictError::MalformedInput {
        path: file_path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_indented_unescaped_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let dictionary: Dictionary = [("hello", "مرحبا")].into_iter().collect();

        save_dictionary(&dictionary, &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"hello\": \"مرحبا\"\n}");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("public").join("nested").join("combined.json");
        save_dictionary(&Dictionary::new(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn round_trip_preserves_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("round.json");
        let dictionary: Dictionary = [
            ("fever", "حمى"),
            ("quote \"mark\"", "back\\slash"),
            ("cough", "سعال"),
        ]
        .into_iter()
        .collect();

        save_dictionary(&dictionary, &path).unwrap();
        assert_eq!(load_dictionary(&path).unwrap(), dictionary);
    }

    #[test]
    fn overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale").unwrap();
        let dictionary: Dictionary = [("a", "b")].into_iter().collect();
        save_dictionary(&dictionary, &path).unwrap();
        assert_eq!(load_dictionary(&path).unwrap(), dictionary);
    }
}
//*** END FILE: src/dict_io.rs ***//
