// File: crates/viz-core/build.rs
// Summary: Links the Windows system library Skia's raster backend pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager calls into the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
