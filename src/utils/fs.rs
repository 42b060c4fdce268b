use std::io;
use std::path::Path;

/// Create `dir` and its parents. An existing directory is success, so concurrent
/// pipelines racing on the same shard need no locking.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    match std::fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(e),
    }
}
