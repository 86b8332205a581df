#![allow(dead_code)]

use std::collections::HashMap;

use flow_components::LoadOptions;

/// The two-block sample shipped under `assets/example/mesh.go`.
pub const MESH_GO: &str = include_str!("../../assets/example/mesh.go");

pub const MESH_GO_FILE: &str = "example/mesh.go";

/// Payload of the `model` component as it appears after decoding.
pub const MODEL_DATA: &str = "mesh: \"/builtins/assets/meshes/cube.dae\"\n\
name: \"{{NAME}}\"\n\
materials {\n\
\x20 name: \"default\"\n\
\x20 material: \"/builtins/materials/model.material\"\n\
\x20 textures {\n\
\x20   sampler: \"tex0\"\n\
\x20   texture: \"/builtins/assets/images/logo/logo_256.png\"\n\
\x20 }\n\
}\n";

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn bindings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Options pointing at this crate's own `assets/` directory, independent of the cwd.
pub fn crate_assets() -> LoadOptions {
    LoadOptions::default().with_asset_root(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
}
