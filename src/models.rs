//! Data models for the clipping pipeline.
//!
//! This module defines the core data structures used throughout the application:
//! - [`RawArticle`]: A search hit as delivered by the Naver search API
//! - [`EnrichmentResult`]: Publisher name and PICK flag recovered for one article
//! - [`Group`]: Editorial tier assigned to known publishers
//! - [`EnrichedRecord`]: Final row combining the above, ready for export
//! - [`Clipping`]: A whole run (query, generation time, records, summary)

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize, Serializer};

/// Label used for articles whose publisher could not be determined at all.
pub const UNKNOWN_PUBLISHER: &str = "기타매체";

/// Marker text used for the PICK flag in tables and spreadsheets.
pub const PICK_LABEL: &str = "PICK";

/// A news article as returned by the upstream search step.
///
/// The title is already HTML-unescaped with tags stripped and double quotes
/// replaced by single quotes. `published_at` always carries the KST (+09:00)
/// offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArticle {
    /// Article URL.
    pub link: String,
    /// Plain-text headline.
    pub title: String,
    /// Publication time in KST.
    pub published_at: DateTime<FixedOffset>,
}

/// Publisher name and PICK status recovered for a single article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    pub publisher: String,
    pub is_pick: bool,
}

impl EnrichmentResult {
    /// Result carrying only a publisher name, not flagged as PICK.
    pub fn unpicked(publisher: impl Into<String>) -> Self {
        Self {
            publisher: publisher.into(),
            is_pick: false,
        }
    }

    /// `"PICK"` when flagged, otherwise the empty string.
    pub fn pick_label(&self) -> &'static str {
        pick_label(self.is_pick)
    }
}

fn pick_label(is_pick: bool) -> &'static str {
    if is_pick { PICK_LABEL } else { "" }
}

/// Editorial tier of a known publisher.
///
/// Publishers missing from the group table are "unclassified", which the
/// rest of the code expresses as `Option<Group>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    A,
    B,
    C,
}

impl Group {
    /// Short code: `"A"`, `"B"` or `"C"`.
    pub fn code(self) -> &'static str {
        match self {
            Group::A => "A",
            Group::B => "B",
            Group::C => "C",
        }
    }

    /// Display label used in the table and spreadsheet.
    pub fn label(self) -> &'static str {
        match self {
            Group::A => "그룹 A",
            Group::B => "그룹 B",
            Group::C => "그룹 C",
        }
    }

    /// Row background colour for this group.
    pub fn color(self) -> &'static str {
        match self {
            Group::A => "#D5F5E3",
            Group::B => "#FEF9E7",
            Group::C => "#FDEBD0",
        }
    }
}

/// Display label for an optional group.
pub fn group_label(group: Option<Group>) -> &'static str {
    group.map(Group::label).unwrap_or("미분류")
}

/// Code for an optional group; the empty string when unclassified.
pub fn group_code(group: Option<Group>) -> &'static str {
    group.map(Group::code).unwrap_or("")
}

/// Row background for an optional group; white when unclassified.
pub fn group_color(group: Option<Group>) -> &'static str {
    group.map(Group::color).unwrap_or("#FFFFFF")
}

/// One row of the final clipping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedRecord {
    #[serde(serialize_with = "serialize_group")]
    pub group: Option<Group>,
    pub publisher: String,
    pub title: String,
    pub link: String,
    #[serde(rename = "pick", serialize_with = "serialize_pick")]
    pub is_pick: bool,
    #[serde(serialize_with = "serialize_published_at")]
    pub published_at: DateTime<FixedOffset>,
}

impl EnrichedRecord {
    pub fn pick_label(&self) -> &'static str {
        pick_label(self.is_pick)
    }

    /// Publication time formatted as `YYYY-MM-DD HH:MM`.
    pub fn published_display(&self) -> String {
        self.published_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

fn serialize_group<S: Serializer>(group: &Option<Group>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(group_code(*group))
}

fn serialize_pick<S: Serializer>(is_pick: &bool, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(pick_label(*is_pick))
}

fn serialize_published_at<S: Serializer>(
    published_at: &DateTime<FixedOffset>,
    s: S,
) -> Result<S::Ok, S::Error> {
    s.collect_str(&published_at.format("%Y-%m-%d %H:%M"))
}

/// Record counts per group and PICK status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub group_a: usize,
    pub group_b: usize,
    pub group_c: usize,
    pub unclassified: usize,
    pub picks: usize,
}

/// The outcome of one run, as written to the JSON output.
#[derive(Debug, Serialize)]
pub struct Clipping {
    pub query: String,
    pub days: u32,
    pub generated_at: String,
    pub summary: Summary,
    pub records: Vec<EnrichedRecord>,
}
