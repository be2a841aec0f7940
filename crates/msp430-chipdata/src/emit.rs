//! Writing generated categories to disk.

use std::path::{Path, PathBuf};

use crate::error::{ChipDataError, Result};
use crate::spec::GeneratedOutput;

/// Write each generated category to `<out_dir>/<CATEGORY>`.
///
/// Existing files are truncated and replaced. The directory must already
/// exist. Stops at the first failed write; files written before it are left
/// in place. Returns the paths written, in order.
pub fn write_output(output: &GeneratedOutput, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for category in output.categories() {
        let Some(contents) = output.render(category) else {
            continue;
        };
        let path = out_dir.join(category.file_name());
        std::fs::write(&path, contents.as_bytes()).map_err(|e| ChipDataError::io(&path, e))?;
        tracing::info!(path = %path.display(), bytes = contents.len(), "wrote {category}");
        written.push(path);
    }
    Ok(written)
}
