//! Story groupings: topics, programs and the other lists stories are filed
//! under.
//!
//! A grouping list is a flat document of `<item>` elements, each carrying
//! story counts for today, this month and all time. Parsed groupings are
//! ordered most active first.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use roxmltree::Node;
use serde::Serialize;

use crate::config::{
    BIOS_LIST_ID, BLOGS_LIST_ID, COLUMNS_LIST_ID, GROUPING_ITEM, MUSIC_GENRES_LIST_ID,
    PROGRAMS_LIST_ID, SERIES_LIST_ID, TOPICS_LIST_ID,
};
use crate::error::{Result, StoryError};
use crate::xml::{
    element_children, find_children, get_tag_name, has_children, require_attribute, text_content,
};

/// Kind of grouping a list holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingKind {
    Topic,
    Program,
    Bio,
    Music,
    Column,
    Series,
    Blog,
}

impl GroupingKind {
    /// All kinds, in display order.
    pub const ALL: [Self; 7] = [
        Self::Topic,
        Self::Program,
        Self::Bio,
        Self::Music,
        Self::Column,
        Self::Series,
        Self::Blog,
    ];

    /// Id of the API list that enumerates groupings of this kind.
    #[must_use]
    pub fn api_list_id(self) -> &'static str {
        match self {
            Self::Topic => TOPICS_LIST_ID,
            Self::Program => PROGRAMS_LIST_ID,
            Self::Bio => BIOS_LIST_ID,
            Self::Music => MUSIC_GENRES_LIST_ID,
            Self::Column => COLUMNS_LIST_ID,
            Self::Series => SERIES_LIST_ID,
            Self::Blog => BLOGS_LIST_ID,
        }
    }

    /// Lower-case name of the kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::Program => "program",
            Self::Bio => "bio",
            Self::Music => "music",
            Self::Column => "column",
            Self::Series => "series",
            Self::Blog => "blog",
        }
    }

    /// Look a kind up by name, case-insensitively. A trailing plural `s`
    /// is accepted (`topics`, `programs`).
    ///
    /// # Errors
    /// Returns [`StoryError::UnknownGroupingKind`] for any other name.
    ///
    /// # Examples
    /// ```
    /// use npr_stories::grouping::GroupingKind;
    ///
    /// assert_eq!(GroupingKind::from_name("Topics").unwrap(), GroupingKind::Topic);
    /// assert_eq!(GroupingKind::from_name("series").unwrap(), GroupingKind::Series);
    /// assert!(GroupingKind::from_name("podcast").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| {
                let singular = kind.name();
                lower == singular || lower.strip_suffix('s') == Some(singular)
            })
            .ok_or_else(|| StoryError::UnknownGroupingKind(name.to_string()))
    }
}

impl fmt::Display for GroupingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GroupingKind {
    type Err = StoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// A topic, program or other list entry stories are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryGrouping {
    pub kind: GroupingKind,
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,

    pub story_count_today: i32,
    pub story_count_month: i32,
    pub story_count_all: i32,
}

impl StoryGrouping {
    /// Compare by activity, most active first.
    ///
    /// Descending by today's count, then this month's, then all time.
    #[must_use]
    pub fn activity_order(&self, other: &Self) -> Ordering {
        (other.story_count_today, other.story_count_month, other.story_count_all).cmp(&(
            self.story_count_today,
            self.story_count_month,
            self.story_count_all,
        ))
    }
}

impl fmt::Display for StoryGrouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title.as_deref().unwrap_or_default())
    }
}

/// Parse a grouping list.
///
/// # Arguments
/// * `kind` - Kind recorded on every grouping
/// * `root` - Root element of the list document
/// * `limit` - Keep at most this many groupings
///
/// # Returns
/// Groupings ordered most active first; ties keep document order. Items
/// with a missing id or a bad count are logged and left out.
pub fn parse_groupings(
    kind: GroupingKind,
    root: Node<'_, '_>,
    limit: Option<usize>,
) -> Vec<StoryGrouping> {
    let mut groupings: Vec<StoryGrouping> = find_children(root, GROUPING_ITEM)
        .filter(|item| has_children(*item))
        .filter_map(|item| match parse_grouping(kind, item) {
            Ok(grouping) => Some(grouping),
            Err(e) => {
                tracing::warn!(kind = %kind, error = %e, "Skipping malformed grouping item");
                None
            }
        })
        .collect();

    groupings.sort_by(StoryGrouping::activity_order);

    if let Some(limit) = limit {
        groupings.truncate(limit);
    }

    tracing::debug!(kind = %kind, count = groupings.len(), "Parsed groupings");
    groupings
}

fn parse_grouping(kind: GroupingKind, item: Node<'_, '_>) -> Result<StoryGrouping> {
    let mut grouping = StoryGrouping {
        kind,
        id: require_attribute(item, "id")?.to_string(),
        title: None,
        additional_info: None,
        story_count_today: require_count(item, "storycounttoday")?,
        story_count_month: require_count(item, "storycountmonth")?,
        story_count_all: require_count(item, "storycountall")?,
    };

    for child in element_children(item) {
        match get_tag_name(child) {
            "title" => grouping.title = Some(text_content(child)),
            "additionalInfo" => grouping.additional_info = Some(text_content(child)),
            _ => {}
        }
    }

    Ok(grouping)
}

fn require_count(item: Node<'_, '_>, name: &str) -> Result<i32> {
    let value = require_attribute(item, name)?;
    value.trim().parse().map_err(|_| StoryError::InvalidNumber {
        attribute: name.to_string(),
        value: value.to_string(),
    })
}
