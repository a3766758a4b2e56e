//! Source tree walk for the initial sync

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::ClonerResult;

/// Every regular file under `source`, in file-name order.
///
/// Non-recursive walks stop at the top level. Hidden files and ignore files
/// get no special treatment. Symlinks are yielded when they point at a file.
/// Unreadable entries come back as errors without ending the walk.
pub fn source_files(
    source: &Path,
    recursive: bool,
) -> impl Iterator<Item = ClonerResult<PathBuf>> {
    let mut builder = WalkBuilder::new(source);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    if !recursive {
        builder.max_depth(Some(1));
    }

    builder.build().filter_map(|entry| match entry {
        Ok(entry) => {
            let is_file = entry.file_type().is_some_and(|ft| {
                ft.is_file() || (ft.is_symlink() && entry.path().is_file())
            });
            is_file.then(|| Ok(entry.into_path()))
        }
        Err(err) => Some(Err(err.into())),
    })
}
