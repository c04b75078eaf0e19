use super::models::FileSystem;
use anyhow::Result;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

impl FileSystem {
    /// Creates the parent directory of `path` if it is missing
    pub async fn ensure_parent(path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !fs::try_exists(parent).await? {
                fs::create_dir_all(parent).await?;
                tracing::debug!("    Created: {}", parent.display());
            }
        }
        Ok(())
    }

    /// Moves `from` to `to`, creating parent dirs. Falls back to copy + unlink
    /// when a rename is not possible (e.g. across filesystems).
    pub async fn move_file(from: &Path, to: &Path) -> io::Result<()> {
        Self::ensure_parent(to).await?;

        match fs::rename(from, to).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(e),
            Err(e) => {
                tracing::debug!(
                    "Rename {} -> {} failed ({}), copying instead",
                    from.display(),
                    to.display(),
                    e
                );
                fs::copy(from, to).await?;
                fs::remove_file(from).await
            }
        }
    }

    /// Removes a file, returning `false` if it did not exist
    pub async fn remove_if_exists(path: &Path) -> io::Result<bool> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Scratch location for a rendered variant, next to the source upload.
    /// `tag` and the flattened `key` together keep every render in its own
    /// sibling file.
    pub fn scratch_path(source: &Path, tag: &str, key: &str) -> PathBuf {
        let flat: String = key.chars().filter(|c| *c != '/' && *c != '\\').collect();
        let mut name = source
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push("-");
        name.push(tag);
        name.push("-");
        name.push(flat);
        source.with_file_name(name)
    }

    /// Best-effort MIME type from a file extension
    pub fn guess_content_type(path: &Path) -> String {
        mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }

    fn get_absolute_path(path: &Path) -> Result<PathBuf> {
        let abs_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        Ok(abs_path)
    }

    pub fn get_absolute_path_string(path: &str) -> Result<String> {
        let path_buf = PathBuf::from(path);
        let abs = Self::get_absolute_path(&path_buf)?;
        Ok(abs.to_string_lossy().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_move_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("src.bin");
        let to = dir.path().join("a/b/dst.bin");
        fs::write(&from, b"data").await.unwrap();

        FileSystem::move_file(&from, &to).await.unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read(&to).await.unwrap(), b"data");
    }

    #[tokio::test]
    async fn test_move_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSystem::move_file(&dir.path().join("nope"), &dir.path().join("x"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_remove_if_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f");
        fs::write(&path, b"x").await.unwrap();

        assert!(FileSystem::remove_if_exists(&path).await.unwrap());
        assert!(!FileSystem::remove_if_exists(&path).await.unwrap());
    }

    #[test]
    fn test_scratch_path_is_sibling() {
        let scratch =
            FileSystem::scratch_path(Path::new("/tmp/upload_123"), "resize", "/ab12/thumb_ab12.jpg");
        assert_eq!(scratch, PathBuf::from("/tmp/upload_123-resize-ab12thumb_ab12.jpg"));

        let crop =
            FileSystem::scratch_path(Path::new("/tmp/upload_123"), "crop", "/ab12/thumb_ab12.jpg");
        assert_ne!(scratch, crop);
    }

    #[test]
    fn test_guess_content_type() {
        assert_eq!(FileSystem::guess_content_type(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(FileSystem::guess_content_type(Path::new("a.png")), "image/png");
        assert_eq!(
            FileSystem::guess_content_type(Path::new("a")),
            "application/octet-stream"
        );
    }
}
