use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What a section renders besides its body text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Landing section with the starfield backdrop
    Hero,
    #[default]
    Text,
    Team,
    Events,
    Hackathon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub role: String,
    /// GitHub or social handle
    #[serde(default)]
    pub handle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// One full-screen section of the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier, unique within the site
    pub id: String,
    /// Short human-readable name for navigation labels
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub kind: SectionKind,
    #[serde(default)]
    pub tagline: Option<String>,
    /// Paragraphs
    #[serde(default)]
    pub body: Vec<String>,
    /// Primary call to action
    #[serde(default)]
    pub link: Option<Link>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Section {
    /// Events on or after `today` (soonest first) and before it (latest first)
    pub fn partition_events(&self, today: NaiveDate) -> (Vec<&Event>, Vec<&Event>) {
        let (mut upcoming, mut past): (Vec<&Event>, Vec<&Event>) =
            self.events.iter().partition(|e| e.date >= today);
        upcoming.sort_by_key(|e| e.date);
        past.sort_by(|a, b| b.date.cmp(&a.date));
        (upcoming, past)
    }
}
