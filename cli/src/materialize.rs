//! Writing a resolved tree to disk.

use {
    crate::{
        resolve::{Payload, ResolvedTree},
        Error, Result,
    },
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

/// Writes `tree` under `root`, creating `root` if needed.
///
/// Entries are written in order. Existing files at the same paths are
/// overwritten and anything else already under `root` is left alone. A failure
/// stops immediately and leaves what was already written in place.
///
/// Returns the path of every entry, joined onto `root`.
///
/// # Errors
/// Returns `Write` naming the path that could not be created.
pub fn write(root: &Path, tree: &ResolvedTree) -> Result<Vec<PathBuf>> {
    create_dir(root)?;

    let mut written = Vec::with_capacity(tree.len());
    for entry in tree {
        let path = root.join(entry.relative_path());
        match &entry.payload {
            Payload::Directory => create_dir(&path)?,
            Payload::File(bytes) => create_file(&path, bytes)?,
        }
        written.push(path);
    }

    Ok(written)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates a file with the given content, creating parent directories if needed.
fn create_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
