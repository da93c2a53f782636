//! Static asset copying.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use folio_content::defaults::POST_IMAGES_DIR;

/// Recursively copy `src` into `dst`, creating directories as needed.
///
/// Returns the number of files copied.
pub fn copy_dir_all(src: &Path, dst: &Path) -> io::Result<usize> {
    let mut count = 0;

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(io::Error::other)?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            count += 1;
        }
    }

    Ok(count)
}

/// Copy each directory post's `images/` folder to `<images_root>/<slug>/images/`,
/// the location rewritten image references point at.
///
/// A missing blog directory copies nothing; content loading reports it.
/// Returns the number of files copied.
pub fn copy_post_images(blog_dir: &Path, images_root: &Path) -> io::Result<usize> {
    if !blog_dir.is_dir() {
        return Ok(0);
    }

    let mut count = 0;

    for entry in WalkDir::new(blog_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let images = entry.path().join(POST_IMAGES_DIR);
        if images.is_dir() {
            let copied = copy_dir_all(
                &images,
                &images_root.join(entry.file_name()).join(POST_IMAGES_DIR),
            )?;
            tracing::debug!("Copied {} images for {}", copied, entry.path().display());
            count += copied;
        }
    }

    Ok(count)
}
