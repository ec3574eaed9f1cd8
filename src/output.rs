use std::fs;
use std::path::{ Path, PathBuf };

use crate::error::Result;

/// Writes `contents` to a file called `name` inside `dir`.
///
/// The directory (and any missing parents) is created first. Existing files
/// are never overwritten: if `dir/name` is taken, the first free name out of
/// `stem-1.ext`, `stem-2.ext`, ... is used instead.
///
/// Returns the path that was actually written.
pub fn write_output(dir: &Path, name: &str, contents: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = free_path(dir, name);
    fs::write(&path, contents)?;
    log::info!("Wrote {} bytes to {}", contents.len(), path.display());

    Ok(path)
}

fn free_path(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if !path.exists() {
        return path;
    }

    let name = Path::new(name);
    let stem = name.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = name.extension().map(|e| e.to_string_lossy().into_owned());

    let mut n = 1;
    loop {
        let candidate = match &ext {
            Some(ext) => dir.join(format!("{}-{}.{}", stem, n, ext)),
            None => dir.join(format!("{}-{}", stem, n)),
        };

        if !candidate.exists() {
            log::debug!("{} already exists, using {}", path.display(), candidate.display());
            return candidate;
        }

        n += 1;
    }
}

#[test]
fn write_creates_directories() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("nested").join("output");

    let path = write_output(&dir, "image.ppm", b"P3\n").unwrap();

    assert_eq!(path, dir.join("image.ppm"));
    assert_eq!(fs::read(&path).unwrap(), b"P3\n");
}

#[test]
fn write_renames_on_collision() {
    let root = tempfile::tempdir().unwrap();

    let first = write_output(root.path(), "clock.png", b"one").unwrap();
    let second = write_output(root.path(), "clock.png", b"two").unwrap();
    let third = write_output(root.path(), "clock.png", b"three").unwrap();

    assert_eq!(first, root.path().join("clock.png"));
    assert_eq!(second, root.path().join("clock-1.png"));
    assert_eq!(third, root.path().join("clock-2.png"));
    assert_eq!(fs::read(&first).unwrap(), b"one");
    assert_eq!(fs::read(&third).unwrap(), b"three");
}

#[test]
fn write_renames_without_extension() {
    let root = tempfile::tempdir().unwrap();

    write_output(root.path(), "notes", b"a").unwrap();
    let second = write_output(root.path(), "notes", b"b").unwrap();

    assert_eq!(second, root.path().join("notes-1"));
}
