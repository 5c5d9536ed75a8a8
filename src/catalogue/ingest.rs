//! Normalization of the remote team listing into catalogue entities.
//!
//! The listing is fetched once by an offline job; this module only turns the
//! raw records into the static artifact the catalogue loads.

use serde::Deserialize;

use super::types::Entity;
use crate::error::Result;

/// One record of the remote FBS team listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub school: String,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub logos: Option<Vec<String>>,
}

/// Lowercase slug of a display name.
///
/// `&` becomes `and`, apostrophes vanish, every other run of
/// non-alphanumerics collapses to one `-`, and edge hyphens are trimmed.
///
/// ```
/// use u_tierlist::catalogue::slugify;
///
/// assert_eq!(slugify("Texas A&M"), "texas-aandm");
/// assert_eq!(slugify("Hawai'i"), "hawaii");
/// assert_eq!(slugify("  Miami (OH) "), "miami-oh");
/// ```
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase().replace('&', "and");
    let mut slug = String::with_capacity(lowered.len());

    for ch in lowered.chars() {
        if ch == '\'' || ch == '\u{2019}' {
            continue;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }

    slug.trim_matches('-').to_string()
}

/// Turns raw records into entities sorted by display name.
pub fn normalize_records(records: Vec<RawRecord>, default_category: &str) -> Vec<Entity> {
    let mut entities: Vec<Entity> = records
        .into_iter()
        .map(|r| {
            let category = r
                .conference
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| default_category.to_owned());
            let logo = r
                .logos
                .and_then(|l| l.into_iter().next())
                .unwrap_or_default();
            Entity::new(slugify(&r.school), r.school, category).with_image(logo)
        })
        .collect();

    entities.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    entities
}

/// Parses the remote listing JSON and normalizes it.
pub fn parse_listing(text: &str, default_category: &str) -> Result<Vec<Entity>> {
    let records: Vec<RawRecord> = serde_json::from_str(text)?;
    Ok(normalize_records(records, default_category))
}

/// Serializes entities as the pretty-printed static artifact.
pub fn write_artifact(entities: &[Entity]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entities)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;

    #[test]
    fn test_slugify_rules() {
        assert_eq!(slugify("Ohio State"), "ohio-state");
        assert_eq!(slugify("Texas A&M"), "texas-aandm");
        assert_eq!(slugify("Hawai\u{2019}i"), "hawaii");
        assert_eq!(slugify("San José State"), "san-jos-state");
        assert_eq!(slugify("--UL Monroe--"), "ul-monroe");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_normalize_defaults_and_sort() {
        let records = vec![
            RawRecord {
                school: "Navy".into(),
                conference: None,
                logos: Some(vec!["http://n/1.png".into(), "http://n/2.png".into()]),
            },
            RawRecord {
                school: "army".into(),
                conference: Some(String::new()),
                logos: Some(vec![]),
            },
            RawRecord {
                school: "Boise State".into(),
                conference: Some("Mountain West".into()),
                logos: None,
            },
        ];
        let out = normalize_records(records, "Independent");

        let names: Vec<&str> = out.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["army", "Boise State", "Navy"]);
        assert_eq!(out[0].category, "Independent");
        assert!(out[0].image_ref.is_none());
        assert_eq!(out[2].image_ref.as_deref(), Some("http://n/1.png"));
        assert_eq!(out[1].id.as_str(), "boise-state");
    }

    #[test]
    fn test_listing_to_catalogue_roundtrip() {
        let listing = r#"[
            {"school":"Air Force","conference":"Mountain West","logos":["http://a/af.png"]},
            {"school":"Notre Dame"}
        ]"#;
        let entities = parse_listing(listing, "Independent").unwrap();
        let artifact = write_artifact(&entities).unwrap();
        let catalogue = Catalogue::from_json(&artifact).unwrap();

        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.lookup("notre-dame").unwrap().category, "Independent");
    }

    #[test]
    fn test_parse_listing_rejects_garbage() {
        assert!(parse_listing("{not json", "Independent").is_err());
    }
}
