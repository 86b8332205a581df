use anyhow::*;
use fs_extra::dir::{CopyOptions, copy};
use std::env;
use std::path::PathBuf;

// Bundles the component files under assets/ with the build output so
// downstream crates can ship them next to their binaries.
fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=assets");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let component_assets = manifest_dir.join("assets");
    if !component_assets.exists() {
        return Ok(());
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let mut options = CopyOptions::new();
    options.overwrite = true;
    copy(&component_assets, &out_dir, &options)
        .with_context(|| format!("copying {} to {}", component_assets.display(), out_dir.display()))?;

    Ok(())
}
