use std::path::Path;

use super::SiteContent;
use crate::Result;

/// Site content compiled into the binary
pub const BUILTIN_SITE: &str = include_str!("../../assets/site.toml");

/// Parse already-read content, choosing the format from the file extension.
///
/// Files ending in `.json` are parsed as JSON, everything else as TOML.
pub fn parse_site(path: &Path, text: &str) -> Result<SiteContent> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        SiteContent::from_json(text)
    } else {
        SiteContent::from_toml(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_text_parses_as_toml() {
        let site = parse_site(Path::new("site.toml"), BUILTIN_SITE).unwrap();
        assert_eq!(site, SiteContent::builtin().unwrap());
    }

    #[test]
    fn test_format_chosen_by_extension() {
        let json = r#"{"title": "t", "sections": [{"id": "a", "name": "A", "title": "A"}]}"#;
        assert!(parse_site(Path::new("site.JSON"), json).is_ok());
        assert!(parse_site(Path::new("site.toml"), json).is_err());
    }
}
