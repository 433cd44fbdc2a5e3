//! facil-storage-json
//!
//! Filesystem-backed [`KeyValueStore`]: one JSON document per key inside a
//! data directory. Writes stage to a sibling temporary file and rename over
//! the target so a failed write never truncates the previous value.

use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use facil_core::{CoreError, KeyValueStore};
use tracing::debug;

const ITEM_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds the value for `key`.
    pub fn item_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(key), ITEM_EXTENSION))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        match fs::read_to_string(self.item_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let path = self.item_path(key);
        let tmp = tmp_path(&path);
        write_atomic(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), bytes = value.len(), "wrote storage item");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), CoreError> {
        match fs::remove_file(self.item_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reversible file stem for `key`: `[a-z0-9_-]` pass through, every other
/// byte becomes `%XX`. Distinct keys never share a file, even on
/// case-insensitive filesystems.
fn canonical_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' => name.push(char::from(byte)),
            _ => {
                name.push('%');
                name.push_str(&hex::encode_upper([byte]));
            }
        }
    }
    name
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_name_escapes_path_characters() {
        assert_eq!(canonical_name("../Secret Key"), "%2E%2E%2F%53ecret%20%4Bey");
        assert_eq!(
            canonical_name("financa_facil_transactions_v1"),
            "financa_facil_transactions_v1"
        );
        assert_eq!(canonical_name("ç"), "%C3%A7");
    }

    #[test]
    fn distinct_keys_get_distinct_names() {
        let keys = ["Ledger", "ledger", "a.b", "a_b", "a%2Eb", "", "item"];
        let names: std::collections::HashSet<_> =
            keys.iter().map(|key| canonical_name(key)).collect();
        assert_eq!(names.len(), keys.len());
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let path = Path::new("/data/ledger.json");
        assert_eq!(tmp_path(path), PathBuf::from("/data/ledger.json.tmp"));
    }
}
