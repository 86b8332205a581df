use std::{collections::HashMap, path::PathBuf};

/// Environment variable that overrides the default asset root.
pub const ASSET_ROOT_ENV: &str = "FLOW_COMPONENTS_ASSET_ROOT";

/**
 * Settings for loading component files.
 *
 * `asset_root` is a directory on native targets and a path below the page
 * origin on wasm32. `bindings` are applied to every loaded component; leave it
 * empty to keep `{{KEY}}` tokens for a later `substitute` call.
 */
#[derive(Clone, Debug)]
pub struct LoadOptions {
    pub asset_root: PathBuf,
    pub bindings: HashMap<String, String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            asset_root: std::path::Path::new("./").join("assets"),
            bindings: HashMap::new(),
        }
    }
}

impl LoadOptions {
    /// Defaults, with the asset root taken from `FLOW_COMPONENTS_ASSET_ROOT` if set.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Some(root) = std::env::var_os(ASSET_ROOT_ENV).filter(|r| !r.is_empty()) {
            options.asset_root = PathBuf::from(root);
        }
        options
    }

    pub fn with_asset_root(mut self, asset_root: impl Into<PathBuf>) -> Self {
        self.asset_root = asset_root.into();
        self
    }

    pub fn with_binding(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.bindings.insert(key.into(), value.into());
        self
    }
}
