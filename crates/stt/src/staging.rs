use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// An upload written to a temporary file for the duration of one request
///
/// The file is removed when the value is dropped, so every exit path of the
/// request cleans it up. [`StagedUpload::remove`] does the same but reports
/// a failed deletion.
#[derive(Debug)]
pub(crate) struct StagedUpload {
    file: NamedTempFile,
}

impl StagedUpload {
    /// Write `audio` to a fresh temporary file in `dir`, or the system temp dir
    pub fn create(dir: Option<&Path>, audio: &[u8]) -> std::io::Result<Self> {
        use std::io::Write;

        let mut builder = tempfile::Builder::new();
        builder.prefix("scribe-upload-");

        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        file.write_all(audio)?;
        file.flush()?;

        Ok(Self { file })
    }

    /// Read the staged bytes back from disk
    pub fn read(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.file.path())
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Delete the file now, logging if that fails
    pub fn remove(self) {
        let path: PathBuf = self.file.path().to_path_buf();

        if let Err(e) = self.file.close() {
            tracing::warn!(path = %path.display(), "Failed to remove staged upload: {e}");
        }
    }
}

/// Stage `audio` and read it back, off the async executor
pub(crate) async fn stage(dir: Option<PathBuf>, audio: Vec<u8>) -> crate::Result<(StagedUpload, Vec<u8>)> {
    tokio::task::spawn_blocking(move || -> crate::Result<(StagedUpload, Vec<u8>)> {
        let staged = StagedUpload::create(dir.as_deref(), &audio)?;
        let buffer = staged.read()?;

        tracing::debug!(path = %staged.path().display(), bytes = buffer.len(), "Upload staged");

        Ok((staged, buffer))
    })
    .await
    .map_err(|e| crate::SttError::InternalError(format!("staging task failed: {e}")))?
}
