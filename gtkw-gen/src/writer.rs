use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::LayoutFormat;
use crate::error::GenError;
use crate::layout::LayoutDocument;

/// Stem of the copy that simulation scripts load by a fixed name.
pub const DUMP_STEM: &str = "dump";

/// Paths written by [`write_layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenLayout {
    pub layout_path: PathBuf,
    pub dump_path: PathBuf,
}

/// Writes `<module>.<ext>` into `out_dir` and the same text to `dump.<ext>`.
///
/// If the dump cannot be written the layout file is removed again, so a
/// failed run leaves no output behind.
pub fn write_layout(
    document: &LayoutDocument,
    module_name: &str,
    format: LayoutFormat,
    out_dir: &Path,
) -> Result<WrittenLayout, GenError> {
    let extension = format.extension();
    let layout_path = out_dir.join(format!("{}.{}", module_name, extension));
    let dump_path = out_dir.join(format!("{}.{}", DUMP_STEM, extension));
    let text = document.to_string();

    fs::write(&layout_path, &text).map_err(|source| GenError::Write {
        path: layout_path.clone(),
        source,
    })?;
    info!("wrote {}", layout_path.display());

    if let Err(source) = fs::write(&dump_path, &text) {
        if let Err(err) = fs::remove_file(&layout_path) {
            warn!("failed to remove {}: {}", layout_path.display(), err);
        }
        return Err(GenError::Write {
            path: dump_path,
            source,
        });
    }
    info!("wrote {}", dump_path.display());

    Ok(WrittenLayout {
        layout_path,
        dump_path,
    })
}
