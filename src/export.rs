//! Export - Spreadsheet artifact for the member table
//!
//! The table is written as CSV: one header row (`id,name,email,role`) and one
//! row per member, in working-set order.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::user::UserRecord;
use crate::error::{Error, Result};

/// File extension of the exported artifact
pub const EXPORT_EXTENSION: &str = "csv";

/// A ready-to-save export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Encode `users` under `<file_stem>.csv`
    pub fn from_users(file_stem: &str, users: &[UserRecord]) -> Result<Self> {
        Ok(Self {
            file_name: format!("{file_stem}.{EXPORT_EXTENSION}"),
            bytes: encode_csv(users)?,
        })
    }

    /// Write into `dir`, replacing an earlier export of the same name
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        info!(path = ?path, bytes = self.bytes.len(), "Export written");
        Ok(path)
    }
}

/// Serialize members to CSV bytes
pub fn encode_csv(users: &[UserRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());

    if users.is_empty() {
        writer.write_record(["id", "name", "email", "role"])?;
    }
    for user in users {
        writer.serialize(user)?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Io {
            source: e.into_error(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(n: usize) -> Vec<UserRecord> {
        (1..=n)
            .map(|i| {
                UserRecord::new(
                    i.to_string(),
                    format!("User {i}"),
                    format!("user{i}@mailinator.com"),
                    "member",
                )
            })
            .collect()
    }

    #[test]
    fn test_encode_has_header_and_one_line_per_user() {
        let bytes = encode_csv(&users(3)).expect("encode");
        let text = String::from_utf8(bytes).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "id,name,email,role");
        assert_eq!(lines[1], "1,User 1,user1@mailinator.com,member");
    }

    #[test]
    fn test_empty_export_still_has_header() {
        let text = String::from_utf8(encode_csv(&[]).expect("encode")).expect("utf8");
        assert_eq!(text.trim_end(), "id,name,email,role");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let user = UserRecord::new("1", "Miles, Aaron", "a@x.io", "member");
        let text = String::from_utf8(encode_csv(&[user]).expect("encode")).expect("utf8");
        assert!(text.contains("\"Miles, Aaron\""));
    }

    #[test]
    fn test_write_to_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let artifact = ExportArtifact::from_users("UserTable", &users(2)).expect("encode");
        assert_eq!(artifact.file_name, "UserTable.csv");

        let path = artifact.write_to(dir.path()).expect("write");
        assert_eq!(path, dir.path().join("UserTable.csv"));
        let written = std::fs::read(&path).expect("read back");
        assert_eq!(written, artifact.bytes);
    }
}
