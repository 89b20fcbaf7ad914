//! The JSON content document and its typed sections.
//!
//! The document root is an object mapping section names (`hero`, `stats`,
//! `achievements`, ...) to section data. [`ContentDoc`] keeps the parsed
//! tree and deserializes one section at a time: a section is only decoded
//! — and only has its required keys validated — when the builder actually
//! renders it. A section whose template markers are absent is never
//! touched; a rendered section with a missing required key fails the whole
//! build through [`ContentError::InvalidSection`].

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("content document root is not an object")]
    NotAnObject,
    #[error("missing section '{0}' in content document")]
    MissingSection(String),
    #[error("invalid section '{name}': {source}")]
    InvalidSection {
        name: String,
        source: serde_json::Error,
    },
}

/// The loaded content document.
#[derive(Debug, Clone)]
pub struct ContentDoc {
    sections: serde_json::Map<String, Value>,
}

impl ContentDoc {
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ContentError> {
        match serde_json::from_str(text)? {
            Value::Object(sections) => Ok(Self { sections }),
            _ => Err(ContentError::NotAnObject),
        }
    }

    /// Deserialize one named section into its typed form.
    pub fn section<T: serde::de::DeserializeOwned>(&self, name: &str) -> Result<T, ContentError> {
        let value = self
            .sections
            .get(name)
            .ok_or_else(|| ContentError::MissingSection(name.to_string()))?;
        serde_json::from_value(value.clone()).map_err(|source| ContentError::InvalidSection {
            name: name.to_string(),
            source,
        })
    }
}

// ============================================================================
// Section types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub name: String,
    pub subtitle: String,
    pub team: String,
    pub hero_image: String,
}

/// Declared accent color of a stat card value.
///
/// Unrecognized tags deserialize to [`StatColor::Unknown`] and render with
/// the neutral white style; an absent tag defaults to white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatColor {
    Blue,
    Green,
    #[default]
    White,
    #[serde(other)]
    Unknown,
}

impl StatColor {
    pub fn value_classes(self) -> &'static str {
        match self {
            StatColor::Blue => "text-neon-blue neon-text",
            StatColor::Green => "text-neon-green neon-text-green",
            StatColor::White | StatColor::Unknown => "text-white",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub icon: String,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub color: StatColor,
    /// Target for the count-up animation. Presence switches the card to the
    /// large numeric-emphasis sizing.
    #[serde(default)]
    pub data_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Achievements {
    pub intro: String,
    pub categories: Vec<AchievementCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AchievementCategory {
    pub name: String,
    pub icon: String,
    pub results: Vec<AchievementResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementResult {
    pub age_group: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Highlighted results get the green accent border.
    #[serde(default)]
    pub highlight: bool,
    #[serde(flatten)]
    pub body: ResultBody,
}

/// A result is either a single place/medal entry or a group of sub-results.
/// Declaring `subResults` makes it a group; otherwise `medal` and `place`
/// are required.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResultBody {
    Group {
        #[serde(rename = "subResults")]
        sub_results: Vec<SubResult>,
    },
    Single {
        medal: String,
        place: String,
        #[serde(rename = "placeColor", default)]
        place_color: Option<String>,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubResult {
    pub medal: String,
    pub event: String,
    pub place: String,
    /// Aggregate line rendered with a separator above it.
    #[serde(default)]
    pub is_total: bool,
    #[serde(default)]
    pub total_color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Bike {
    pub name: String,
    pub image: String,
    pub specs: Vec<BikeSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BikeSpec {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Motivation {
    pub quote: String,
    pub cards: Vec<MotivationCard>,
    #[serde(default)]
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MotivationCard {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub made_with: String,
    pub copyright: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub platform: Platform,
    pub url: String,
}

/// Supported social platforms. Anything else deserializes to [`Platform::Other`]
/// and renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Strava,
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> ContentDoc {
        ContentDoc::parse(
            r##"{
            "hero": {
                "name": "Alex Kovacs",
                "subtitle": "Road cyclist",
                "team": "Velo Club",
                "heroImage": "Pictures/hero.jpg"
            },
            "stats": [
                {"icon": "T", "label": "Wins", "value": "12", "dataCount": 12, "color": "green"},
                {"icon": "K", "label": "Kilometers", "value": "a lot", "color": "violet"},
                {"icon": "S", "label": "Seasons", "value": "4"}
            ],
            "footer": {
                "madeWith": "made with grit",
                "copyright": "2026",
                "socialLinks": [
                    {"platform": "instagram", "url": "https://instagram.com/x"},
                    {"platform": "mastodon", "url": "https://example.org"}
                ]
            }
        }"##,
        )
        .unwrap()
    }

    #[test]
    fn parse_rejects_non_object_root() {
        assert!(matches!(
            ContentDoc::parse("[1, 2, 3]"),
            Err(ContentError::NotAnObject)
        ));
    }

    #[test]
    fn section_extracts_typed_hero() {
        let hero: Hero = sample_doc().section("hero").unwrap();
        assert_eq!(hero.name, "Alex Kovacs");
        assert_eq!(hero.hero_image, "Pictures/hero.jpg");
    }

    #[test]
    fn missing_section_only_fails_when_asked() {
        let doc = sample_doc();
        // The bike section is absent, but nothing fails until it is requested.
        assert!(doc.section::<Hero>("hero").is_ok());
        assert!(matches!(
            doc.section::<Bike>("bike"),
            Err(ContentError::MissingSection(name)) if name == "bike"
        ));
    }

    #[test]
    fn missing_required_key_is_invalid_section() {
        let doc = ContentDoc::parse(r#"{"hero": {"name": "Alex"}}"#).unwrap();
        assert!(matches!(
            doc.section::<Hero>("hero"),
            Err(ContentError::InvalidSection { name, .. }) if name == "hero"
        ));
    }

    #[test]
    fn stat_color_defaults_and_unknown_fall_back_to_white() {
        let stats: Vec<Stat> = sample_doc().section("stats").unwrap();
        assert_eq!(stats[0].color, StatColor::Green);
        assert_eq!(stats[1].color, StatColor::Unknown);
        assert_eq!(stats[2].color, StatColor::White);
        assert_eq!(stats[1].color.value_classes(), "text-white");
        assert_eq!(stats[2].color.value_classes(), "text-white");
    }

    #[test]
    fn stat_data_count_is_optional() {
        let stats: Vec<Stat> = sample_doc().section("stats").unwrap();
        assert_eq!(stats[0].data_count, Some(12));
        assert_eq!(stats[1].data_count, None);
    }

    #[test]
    fn result_body_prefers_group_when_sub_results_declared() {
        let json = r##"{
            "ageGroup": "U17",
            "title": "National Series",
            "subResults": [
                {"medal": "G", "event": "Road race", "place": "1st"},
                {"medal": "*", "event": "Overall", "place": "2nd", "isTotal": true, "totalColor": "text-neon-green"}
            ]
        }"##;
        let result: AchievementResult = serde_json::from_str(json).unwrap();
        match result.body {
            ResultBody::Group { sub_results } => {
                assert_eq!(sub_results.len(), 2);
                assert!(!sub_results[0].is_total);
                assert!(sub_results[1].is_total);
                assert_eq!(
                    sub_results[1].total_color.as_deref(),
                    Some("text-neon-green")
                );
            }
            ResultBody::Single { .. } => panic!("expected a group body"),
        }
    }

    #[test]
    fn result_body_single_requires_medal_and_place() {
        let ok = r#"{"ageGroup": "U17", "title": "Hill climb", "medal": "S", "place": "2nd"}"#;
        let result: AchievementResult = serde_json::from_str(ok).unwrap();
        assert!(matches!(result.body, ResultBody::Single { .. }));

        // Neither subResults nor medal/place: no variant matches.
        let bad = r#"{"ageGroup": "U17", "title": "Hill climb"}"#;
        assert!(serde_json::from_str::<AchievementResult>(bad).is_err());
    }

    #[test]
    fn unrecognized_platform_becomes_other() {
        let footer: Footer = sample_doc().section("footer").unwrap();
        assert_eq!(footer.social_links[0].platform, Platform::Instagram);
        assert_eq!(footer.social_links[1].platform, Platform::Other);
    }
}
