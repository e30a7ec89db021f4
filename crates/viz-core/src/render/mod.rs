// File: crates/viz-core/src/render/mod.rs
// Summary: Scene backends: SVG documents and Skia raster images.

pub mod raster;
pub mod svg;

pub use raster::RasterOptions;

/// Create the parent directory of an output file when it is missing.
pub(crate) fn ensure_parent(path: &std::path::Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
