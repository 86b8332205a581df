use anyhow::Context;

use crate::data_structures::component::ComponentList;

/**
 * This module contains all logic for loading component files from the asset root.
 */
pub mod options;
pub mod text;

pub use options::LoadOptions;
pub use text::load_string;

/// Loads and parses one component file, applying `options.bindings` if any.
pub async fn load_components(
    file_name: &str,
    options: &LoadOptions,
) -> anyhow::Result<ComponentList> {
    let txt = load_string(file_name, options).await?;
    let components = ComponentList::from_text(&txt)
        .with_context(|| format!("Failed to parse component file {file_name}"))?;
    log::info!(
        "Loaded {} embedded component(s) from {}",
        components.len(),
        file_name
    );

    if options.bindings.is_empty() {
        Ok(components)
    } else {
        Ok(components.substitute(&options.bindings))
    }
}

/// Loads several component files concurrently. Results keep the order of `file_names`.
pub async fn load_component_files(
    file_names: &[&str],
    options: &LoadOptions,
) -> anyhow::Result<Vec<ComponentList>> {
    futures::future::join_all(
        file_names
            .iter()
            .map(|file_name| load_components(file_name, options)),
    )
    .await
    .into_iter()
    .collect()
}
