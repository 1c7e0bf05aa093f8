//! Content Models
//!
//! One record type per collection, matching the JSON resources under the
//! data directory. Text fields default to empty so a sparse item still
//! renders; only a wholesale shape mismatch fails a load.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Named content collections, each backed by one JSON resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Blog,
    Skills,
    Education,
    Experience,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Projects,
        Collection::Blog,
        Collection::Skills,
        Collection::Education,
        Collection::Experience,
    ];

    /// Resource file name inside the data directory
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Projects => "projects.json",
            Collection::Blog => "blog.json",
            Collection::Skills => "skills.json",
            Collection::Education => "education.json",
            Collection::Experience => "experience.json",
        }
    }

    /// Message shown in place of the items when loading fails
    pub fn fallback_message(self) -> &'static str {
        match self {
            Collection::Projects => "Failed to load projects.",
            Collection::Blog => "Failed to load blog posts.",
            Collection::Skills => "Failed to load skills.",
            Collection::Education => "Failed to load education.",
            Collection::Experience => "Failed to load experience.",
        }
    }

    /// URL of the resource relative to `data_dir`
    pub fn url(self, data_dir: &str) -> String {
        format!("{}/{}", data_dir.trim_end_matches('/'), self.file_name())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub short: String,
    pub description: String,
    pub tech: Vec<String>,
    pub thumbnail: String,
    pub live: Option<String>,
    pub repo: String,
}

impl Project {
    /// Comma-separated technologies for screen readers
    pub fn tech_summary(&self) -> String {
        if self.tech.is_empty() {
            "N/A".to_string()
        } else {
            self.tech.join(", ")
        }
    }

    /// Badges shown on the card
    pub fn tech_badges(&self) -> Vec<String> {
        if self.tech.is_empty() {
            vec!["Technology: N/A".to_string()]
        } else {
            self.tech.clone()
        }
    }

    pub fn card_label(&self) -> String {
        format!("{} — open details", self.title)
    }

    /// Live demo URL, ignoring blank values
    pub fn live_url(&self) -> Option<&str> {
        self.live.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub title: String,
    pub summary: Option<String>,
    pub url: String,
    pub published: Option<String>,
}

impl BlogPost {
    pub fn card_label(&self) -> String {
        format!("{} — open on external site", self.title)
    }

    /// Published date as `Mon D, YYYY`, if it parses
    pub fn published_label(&self) -> Option<String> {
        let raw = self.published.as_deref()?.trim();
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))?;
        Some(date.format("%b %-d, %Y").to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub start_date: String,
    pub end_date: String,
    pub notes: Option<String>,
}

impl EducationEntry {
    pub fn date_range(&self) -> String {
        date_range(&self.start_date, &self.end_date)
    }

    pub fn card_label(&self) -> String {
        self.degree.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: Vec<String>,
}

impl ExperienceEntry {
    pub fn date_range(&self) -> String {
        date_range(&self.start_date, &self.end_date)
    }

    pub fn heading(&self) -> String {
        format!("{} — {}", self.title, self.company)
    }

    pub fn card_label(&self) -> String {
        format!("{} at {}", self.title, self.company)
    }
}

fn date_range(start: &str, end: &str) -> String {
    format!("{} – {}", start, end)
}

/// Parse a collection resource body. The top level must be an array.
pub fn parse_collection<T>(body: &str) -> Result<Vec<T>, serde_json::Error>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_urls() {
        assert_eq!(Collection::Projects.url("./data"), "./data/projects.json");
        assert_eq!(Collection::Blog.url("./data/"), "./data/blog.json");
        assert_eq!(Collection::Experience.url("content"), "content/experience.json");
    }

    #[test]
    fn test_fallback_messages_are_distinct() {
        let mut msgs: Vec<_> = Collection::ALL.iter().map(|c| c.fallback_message()).collect();
        msgs.sort();
        msgs.dedup();
        assert_eq!(msgs.len(), 5);
        assert_eq!(Collection::Blog.fallback_message(), "Failed to load blog posts.");
    }

    #[test]
    fn test_parse_skills_preserves_order() {
        let skills: Vec<Skill> =
            parse_collection(r#"[{"name":"Go","icon":"●"},{"name":"Rust","icon":"▲"}]"#).unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].name, "Go");
        assert_eq!(skills[1].name, "Rust");
        assert_eq!(skills[1].icon, "▲");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_collection::<Skill>(r#"{"name":"Go"}"#).is_err());
        assert!(parse_collection::<Skill>("not json").is_err());
    }

    #[test]
    fn test_sparse_project_uses_defaults() {
        let projects: Vec<Project> = parse_collection(r#"[{"title":"Bare"}]"#).unwrap();
        let p = &projects[0];
        assert_eq!(p.title, "Bare");
        assert!(p.tech.is_empty());
        assert_eq!(p.live_url(), None);
        assert_eq!(p.tech_summary(), "N/A");
        assert_eq!(p.tech_badges(), vec!["Technology: N/A".to_string()]);
    }

    #[test]
    fn test_project_tech_and_live() {
        let p = Project {
            title: "Site".into(),
            tech: vec!["Rust".into(), "WASM".into()],
            live: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(p.tech_summary(), "Rust, WASM");
        assert_eq!(p.live_url(), None);
        assert_eq!(p.card_label(), "Site — open details");
    }

    #[test]
    fn test_education_camel_case_fields() {
        let entries: Vec<EducationEntry> = parse_collection(
            r#"[{"degree":"BSc","school":"Uni","startDate":"2016","endDate":"2020"}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].date_range(), "2016 – 2020");
        assert_eq!(entries[0].card_label(), "BSc");
        assert_eq!(entries[0].degree, "BSc");
        assert_eq!(entries[0].notes, None);
    }

    #[test]
    fn test_experience_heading_and_missing_responsibilities() {
        let entries: Vec<ExperienceEntry> =
            parse_collection(r#"[{"title":"Engineer","company":"Acme","startDate":"2021","endDate":"Present"}]"#)
                .unwrap();
        let e = &entries[0];
        assert_eq!(e.heading(), "Engineer — Acme");
        assert_eq!(e.card_label(), "Engineer at Acme");
        assert!(e.responsibilities.is_empty());
    }

    #[test]
    fn test_blog_published_label() {
        let mut post = BlogPost {
            published: Some("2024-03-05".into()),
            ..Default::default()
        };
        assert_eq!(post.published_label().as_deref(), Some("Mar 5, 2024"));

        post.published = Some("2023-11-20T10:00:00Z".into());
        assert_eq!(post.published_label().as_deref(), Some("Nov 20, 2023"));

        post.published = Some("someday".into());
        assert_eq!(post.published_label(), None);

        post.published = None;
        assert_eq!(post.published_label(), None);
    }
}
