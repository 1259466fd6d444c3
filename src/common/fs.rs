use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Write-then-rename wrapper, so a failed run never leaves a partial file behind.
pub(crate) struct PendingWrite {
    target: PathBuf,
    tmp: NamedTempFile,
}

impl PendingWrite {
    /// Open a temp file next to `target`.
    pub(crate) fn open(target: &Path, force: bool) -> Result<Self> {
        let output_err = |source: io::Error| Error::Output { path: target.to_path_buf(), source };

        if target == Path::new("-") {
            return Err(output_err(io::Error::new(io::ErrorKind::InvalidInput,
                "stdout is not supported; provide a real file path")));
        }

        let parent = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(output_err)?;

        if !force && target.exists() {
            return Err(output_err(io::Error::new(io::ErrorKind::AlreadyExists,
                "refusing to overwrite existing file (use --force)")));
        }

        let tmp = NamedTempFile::new_in(parent).map_err(output_err)?;
        Ok(Self { target: target.to_path_buf(), tmp })
    }

    /// Flush, fsync and move the temp file into place.
    pub(crate) fn finalize(mut self) -> Result<()> {
        let target = self.target;
        let output_err = |source: io::Error| Error::Output { path: target.clone(), source };

        self.tmp.flush().map_err(output_err)?;
        self.tmp.as_file().sync_all().ok(); // best-effort fsync file
        self.tmp.persist(&target).map_err(|e| output_err(e.error))?;

        if let Some(dir) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            let _ = File::open(dir).and_then(|f| f.sync_all());
        }
        Ok(())
    }
}

impl Write for PendingWrite {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> { self.tmp.write(buf) }

    fn flush(&mut self) -> io::Result<()> { self.tmp.flush() }
}

/// Write `bytes` to `path` atomically. Refuses to overwrite unless `force`.
pub fn write_image(path: &Path, bytes: &[u8], force: bool) -> Result<()> {
    let mut sink = PendingWrite::open(path, force)?;
    sink.write_all(bytes)
        .map_err(|source| Error::Output { path: path.to_path_buf(), source })?;
    sink.finalize()
}
