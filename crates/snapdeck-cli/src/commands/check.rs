use std::path::Path;

use anyhow::Result;

use super::load_content;

pub async fn run(path: Option<&Path>) -> Result<()> {
    let site = load_content(path).await?;
    site.validate()?;

    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in content".to_string());
    println!("{}: OK", source);
    println!("  {} - {} sections", site.title, site.len());

    let without_link = site.sections.iter().filter(|s| s.link.is_none()).count();
    if without_link > 0 {
        println!("  {} section(s) without a link", without_link);
    }

    Ok(())
}
