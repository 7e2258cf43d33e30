//! Cross-platform filesystem helpers for the document store

use std::fs;
use std::io;
use std::path::Path;

/// Atomically replace `dst` with `src`.
///
/// On Unix, `fs::rename` replaces the target in one step. On Windows the
/// rename fails if the target exists, so it is deleted first; the window
/// this opens is accepted there.
pub fn atomic_rename(src: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if dst.exists() {
            fs::remove_file(dst)?;
        }
    }
    fs::rename(src, dst)
}

/// Write `contents` to `path` without ever exposing a partial file.
///
/// The bytes go to a sibling temporary file which is then renamed over the
/// target, so concurrent readers see either the old content or the new,
/// never a torn write. Creates the parent directory if absent. On failure
/// the previous file, if any, is untouched.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    atomic_rename(&tmp_path, path)
}
