use std::rc::Rc;

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;
use yew::prelude::*;

use crate::config;

/// Countdown target used when `deadlines.wharton` is not set in content.json.
pub const DEFAULT_DEADLINE: &str = "2025-12-01T23:59:00";

const DEFAULT_HERO_SUBTITLE: &str =
    "Real competitions, real projects, real connections. Experiences that count.";

const FALLBACK_TICKER: [&str; 6] = [
    "Monopoly Nights",
    "Wharton Global (Sep–Dec)",
    "Guest Speaker Q&A",
    "Internship Pathways",
    "JA Titan Prep",
    "Acre Pitch Showcase",
];

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content.json could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("deadline {value:?} is not a recognised date")]
    InvalidDeadline {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Content {
    pub org: Org,
    pub ui: Ui,
    pub why: Vec<WhyCard>,
    pub programs: Vec<Program>,
    pub events: Vec<Event>,
    pub photos: Option<Vec<Photo>>,
    pub newsletter: Newsletter,
    pub deadlines: Deadlines,
    pub ticker: Option<Vec<String>>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Org {
    pub name: String,
    pub tagline: String,
    pub hero_title: String,
    pub hero_subtitle: Option<String>,
    pub contact_email: String,
    pub socials: Socials,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Socials {
    pub instagram: Option<String>,
    pub discord: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Ui {
    pub brand: Brand,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Brand {
    pub bg: String,
    pub primary: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            bg: "#0b0c0d".to_string(),
            primary: "#8FA98B".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct WhyCard {
    pub title: String,
    pub body: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Program {
    pub name: String,
    pub desc: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Event {
    pub date: String,
    pub title: String,
    pub meta: String,
}

impl Event {
    /// Splits "Oct 15" into the big and small labels of the date badge.
    pub fn date_parts(&self) -> (&str, &str) {
        let mut parts = self.date.split(' ');
        let first = parts.next().unwrap_or("");
        let second = parts.next().unwrap_or("");
        (first, second)
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Photo {
    pub url: String,
    pub alt: Option<String>,
}

impl Photo {
    pub fn alt_text(&self) -> &str {
        match self.alt.as_deref() {
            Some(alt) if !alt.is_empty() => alt,
            _ => "club photo",
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Newsletter {
    pub blurb: String,
    pub form: NewsletterForm,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct NewsletterForm {
    pub enabled: bool,
    pub url: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Deadlines {
    pub wharton: Option<String>,
}

impl Content {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parses the bundled content.json. A broken file leaves an empty page
    /// rather than a crashed one.
    pub fn load() -> Self {
        match Self::from_json(config::CONTENT_JSON) {
            Ok(content) => {
                debug!(
                    "Loaded content for {}: {} why cards, {} programs, {} events",
                    content.org.name,
                    content.why.len(),
                    content.programs.len(),
                    content.events.len()
                );
                content
            }
            Err(err) => {
                warn!("{}", err);
                Self::default()
            }
        }
    }

    pub fn hero_subtitle(&self) -> &str {
        match self.org.hero_subtitle.as_deref() {
            Some(subtitle) if !subtitle.is_empty() => subtitle,
            _ => DEFAULT_HERO_SUBTITLE,
        }
    }

    /// Deadline for the hero countdown, falling back to [`DEFAULT_DEADLINE`].
    pub fn countdown_target(&self) -> String {
        match self.deadlines.wharton.as_deref() {
            Some(iso) if !iso.is_empty() => iso.to_string(),
            _ => DEFAULT_DEADLINE.to_string(),
        }
    }

    pub fn ticker_items(&self) -> Vec<String> {
        match &self.ticker {
            Some(items) if !items.is_empty() => items.clone(),
            _ => FALLBACK_TICKER.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn photos(&self) -> &[Photo] {
        self.photos.as_deref().unwrap_or(&[])
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.org.contact_email)
    }
}

/// Content shared from the root `ContextProvider`; empty if none is mounted.
#[hook]
pub fn use_content() -> Rc<Content> {
    use_context::<Rc<Content>>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content = Content::from_json(config::CONTENT_JSON).unwrap();
        assert_eq!(content.org.name, "Acre");
        assert!(!content.why.is_empty());
        assert!(!content.newsletter.form.enabled);
    }

    #[test]
    fn optional_sections_may_be_missing() {
        let content = Content::from_json(
            r#"{
                "org": { "name": "Acre", "contactEmail": "a@b.org" },
                "why": [], "programs": [], "events": [],
                "newsletter": { "blurb": "hi", "form": { "enabled": true, "url": "https://x.test/s" } }
            }"#,
        )
        .unwrap();
        assert!(content.photos().is_empty());
        assert_eq!(content.countdown_target(), DEFAULT_DEADLINE);
        assert_eq!(content.ticker_items().len(), FALLBACK_TICKER.len());
        assert_eq!(content.ui.brand.primary, "#8FA98B");
        assert_eq!(content.mailto(), "mailto:a@b.org");
        assert_eq!(content.org.socials.discord, None);
    }

    #[test]
    fn item_missing_a_field_keeps_the_rest_of_the_page() {
        let content = Content::from_json(
            r#"{
                "org": { "name": "Acre" },
                "why": [{ "body": "no title here" }, { "title": "Kept", "body": "Fine" }],
                "programs": [{ "name": "Speaker Series" }],
                "events": [{ "date": "Oct 15", "meta": "Room 214" }],
                "photos": [{ "alt": "missing url" }]
            }"#,
        )
        .unwrap();
        assert_eq!(content.org.name, "Acre");
        assert_eq!(content.why.len(), 2);
        assert_eq!(content.why[0].title, "");
        assert_eq!(content.why[1].title, "Kept");
        assert_eq!(content.programs[0].desc, "");
        assert_eq!(content.events[0].title, "");
        assert_eq!(content.events[0].date_parts(), ("Oct", "15"));
        assert_eq!(content.photos()[0].url, "");
    }

    #[test]
    fn bundled_event_without_title_still_loads() {
        let mut raw: serde_json::Value = serde_json::from_str(config::CONTENT_JSON).unwrap();
        raw["events"][0].as_object_mut().unwrap().remove("title");
        let content = Content::from_json(&raw.to_string()).unwrap();
        assert_eq!(content.org.name, "Acre");
        assert_eq!(content.events[0].title, "");
        assert!(!content.events[1].title.is_empty());
    }

    #[test]
    fn malformed_content_is_an_error() {
        let err = Content::from_json("{ \"org\": 3 }").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn ticker_uses_content_when_present() {
        let content = Content {
            ticker: Some(vec!["One".into(), "Two".into()]),
            ..Default::default()
        };
        assert_eq!(content.ticker_items(), vec!["One", "Two"]);

        let empty = Content {
            ticker: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(empty.ticker_items()[0], "Monopoly Nights");
    }

    #[test]
    fn event_date_splits_on_first_space() {
        let event = |date: &str| Event {
            date: date.to_string(),
            title: String::new(),
            meta: String::new(),
        };
        assert_eq!(event("Oct 15").date_parts(), ("Oct", "15"));
        assert_eq!(event("TBA").date_parts(), ("TBA", ""));
        assert_eq!(event("").date_parts(), ("", ""));
    }

    #[test]
    fn photo_alt_defaults() {
        let photo = Photo {
            url: "/a.webp".into(),
            alt: None,
        };
        assert_eq!(photo.alt_text(), "club photo");
        let photo = Photo {
            url: "/a.webp".into(),
            alt: Some("Pitch night".into()),
        };
        assert_eq!(photo.alt_text(), "Pitch night");
    }

    #[test]
    fn hero_subtitle_falls_back() {
        let mut content = Content::default();
        assert_eq!(content.hero_subtitle(), DEFAULT_HERO_SUBTITLE);
        content.org.hero_subtitle = Some("Custom".into());
        assert_eq!(content.hero_subtitle(), "Custom");
    }
}
