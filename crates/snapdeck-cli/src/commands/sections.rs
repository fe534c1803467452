use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use snapdeck_core::content::SectionKind;

use super::load_content;

#[derive(Serialize)]
struct SectionSummary<'a> {
    index: usize,
    id: &'a str,
    name: &'a str,
    title: &'a str,
    kind: SectionKind,
}

pub async fn run(path: Option<&Path>, json: bool) -> Result<()> {
    let site = load_content(path).await?;

    let summaries: Vec<SectionSummary> = site
        .sections
        .iter()
        .enumerate()
        .map(|(index, s)| SectionSummary {
            index: index + 1,
            id: &s.id,
            name: &s.name,
            title: &s.title,
            kind: s.kind,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("{} ({} sections):\n", site.title, site.len());
    let id_width = summaries.iter().map(|s| s.id.len()).max().unwrap_or(0);
    for s in &summaries {
        println!(
            "  {}. {:<width$}  {} - {}",
            s.index,
            s.id,
            s.name,
            s.title,
            width = id_width
        );
    }

    Ok(())
}
