use anyhow::Context;

use crate::resources::options::LoadOptions;

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str, options: &LoadOptions) -> anyhow::Result<reqwest::Url> {
    let window = web_sys::window().context("no global window available")?;
    let origin = window
        .location()
        .origin()
        .map_err(|e| anyhow::anyhow!("could not read page origin: {e:?}"))?;
    let root = options.asset_root.to_string_lossy();
    let root = root.trim_start_matches("./").trim_matches('/');
    let base = reqwest::Url::parse(&format!("{origin}/{root}/"))?;
    Ok(base.join(file_name)?)
}

/// Reads a component file relative to the configured asset root.
pub async fn load_string(file_name: &str, options: &LoadOptions) -> anyhow::Result<String> {
    #[cfg(target_arch = "wasm32")]
    let txt = {
        let url = format_url(file_name, options)?;
        reqwest::get(url.clone())
            .await
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("Could not fetch {url}"))?
            .text()
            .await?
    };
    #[cfg(not(target_arch = "wasm32"))]
    let txt = {
        let path = options.asset_root.join(file_name);
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Could not read {}", path.display()))?
    };

    Ok(txt)
}
