//! Reading from and writing to files on disk.
//!
//! Inputs are memory mapped and decoded straight from the mapping. Outputs are written to a
//! temporary file in the destination directory, synced, then renamed over the destination,
//! so a failed or interrupted write never leaves a truncated image behind.

use crate::{decode_ppm, encode_ppm, PpmError, PpmResult};
use core::fmt::Display;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use log::{debug, info};
use planar_adjust_common::PlanarImage;
use std::io::{self, BufWriter};
use std::path::Path;

/// Reads and decodes the image at `path`.
///
/// # Errors
///
/// [`PpmError::Io`] if the file cannot be opened or mapped, otherwise any error from
/// [`decode_ppm`].
pub fn read_ppm_file(path: &Path) -> PpmResult<PlanarImage> {
    let handle = ReadOnlyFileHandle::open(path).map_err(|e| io_error(path, e))?;
    let size = handle.size().map_err(|e| io_error(path, e))? as usize;
    debug!("Opened {} ({size} bytes)", path.display());

    // Empty files cannot be mapped.
    if size == 0 {
        return decode_ppm(&[]);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size).map_err(|e| io_error(path, e))?;
    let image = decode_ppm(mapping.as_slice())?;
    info!(
        "Read {}x{} image from {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(image)
}

/// Encodes `image` and atomically replaces the file at `path` with it.
///
/// The parent directory must exist. On failure the destination is left as it was.
///
/// # Errors
///
/// [`PpmError::Io`] if the temporary file cannot be created, written or renamed.
pub fn write_ppm_file(image: &PlanarImage, path: &Path) -> PpmResult<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".planar-adjust-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    let mut temp = builder
        .tempfile_in(directory)
        .map_err(|e| io_error(path, e))?;

    encode_ppm(image, BufWriter::new(temp.as_file_mut())).map_err(|e| io_error(path, e))?;
    temp.as_file().sync_all().map_err(|e| io_error(path, e))?;
    temp.persist(path).map_err(|e| io_error(path, e.error))?;

    info!(
        "Wrote {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

fn io_error(path: &Path, error: impl Display) -> PpmError {
    PpmError::Io(io::Error::other(format!("{}: {error}", path.display())))
}
