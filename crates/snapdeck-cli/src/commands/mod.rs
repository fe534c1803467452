pub mod check;
pub mod init_config;
pub mod run;
pub mod sections;

use std::path::Path;

use anyhow::{Context, Result};
use snapdeck_core::content::parse_site;
use snapdeck_core::SiteContent;
use tracing::info;

/// Load site content from `path`, or the built-in site when `None`
pub async fn load_content(path: Option<&Path>) -> Result<SiteContent> {
    let Some(path) = path else {
        return Ok(SiteContent::builtin()?);
    };

    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let site = parse_site(path, &text)
        .with_context(|| format!("invalid content in {}", path.display()))?;
    info!(path = %path.display(), sections = site.len(), "loaded site content");
    Ok(site)
}
