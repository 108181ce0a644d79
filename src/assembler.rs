//! Assembly of the final record set, plus filtering and summary counts.
//!
//! [`assemble`] zips the raw search hits with their enrichment results by
//! index and classifies each publisher. Output order is input order
//! (most recent first, as delivered by the search step).

use crate::classifier::classify;
use crate::models::{EnrichedRecord, EnrichmentResult, Group, RawArticle, Summary, UNKNOWN_PUBLISHER};
use clap::ValueEnum;
use tracing::debug;

/// Build one [`EnrichedRecord`] per raw article, in input order.
///
/// `enrichment[i]` belongs to `items[i]`; a missing entry yields
/// [`UNKNOWN_PUBLISHER`] with no PICK flag. Double quotes in titles become
/// single quotes so the exporter can embed them in a formula.
pub fn assemble(items: &[RawArticle], enrichment: &[EnrichmentResult]) -> Vec<EnrichedRecord> {
    let records: Vec<EnrichedRecord> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let (publisher, is_pick) = match enrichment.get(i) {
                Some(result) => (result.publisher.clone(), result.is_pick),
                None => (UNKNOWN_PUBLISHER.to_string(), false),
            };
            EnrichedRecord {
                group: classify(&publisher),
                publisher,
                title: item.title.replace('"', "'"),
                link: item.link.clone(),
                is_pick,
                published_at: item.published_at,
            }
        })
        .collect();
    debug!(count = records.len(), "Assembled records");
    records
}

/// Group selector for filtering, including the unclassified bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupFilter {
    A,
    B,
    C,
    #[value(alias = "none")]
    Unclassified,
}

impl GroupFilter {
    pub const ALL: [GroupFilter; 4] = [
        GroupFilter::A,
        GroupFilter::B,
        GroupFilter::C,
        GroupFilter::Unclassified,
    ];

    fn matches(self, group: Option<Group>) -> bool {
        match (self, group) {
            (GroupFilter::A, Some(Group::A)) => true,
            (GroupFilter::B, Some(Group::B)) => true,
            (GroupFilter::C, Some(Group::C)) => true,
            (GroupFilter::Unclassified, None) => true,
            _ => false,
        }
    }
}

/// View filter over assembled records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    pub groups: Vec<GroupFilter>,
    pub pick_only: bool,
    /// Case-insensitive title substring.
    pub keyword: Option<String>,
}

impl Default for RecordFilter {
    fn default() -> Self {
        Self {
            groups: GroupFilter::ALL.to_vec(),
            pick_only: false,
            keyword: None,
        }
    }
}

impl RecordFilter {
    pub fn matches(&self, record: &EnrichedRecord) -> bool {
        if !self.groups.iter().any(|g| g.matches(record.group)) {
            return false;
        }
        if self.pick_only && !record.is_pick {
            return false;
        }
        match self.keyword.as_deref().map(str::trim) {
            Some(keyword) if !keyword.is_empty() => record
                .title
                .to_lowercase()
                .contains(&keyword.to_lowercase()),
            _ => true,
        }
    }

    /// Records passing the filter, order preserved.
    pub fn apply(&self, records: &[EnrichedRecord]) -> Vec<EnrichedRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Count records per group and PICK status.
pub fn summarize(records: &[EnrichedRecord]) -> Summary {
    records.iter().fold(
        Summary {
            total: records.len(),
            ..Summary::default()
        },
        |mut summary, record| {
            match record.group {
                Some(Group::A) => summary.group_a += 1,
                Some(Group::B) => summary.group_b += 1,
                Some(Group::C) => summary.group_c += 1,
                None => summary.unclassified += 1,
            }
            if record.is_pick {
                summary.picks += 1;
            }
            summary
        },
    )
}
