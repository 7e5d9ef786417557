//! # Domain Model: Journal Entries and Normalization
//!
//! This module defines the core data structures: [`JournalEntry`], [`Mood`],
//! and [`EntryDraft`]. It also owns load-time normalization, which is what
//! keeps the persisted slot trustworthy.
//!
//! ## The Problem
//!
//! The storage slot is plain JSON that outlives any single build of the app,
//! and nothing stops a user (or an older build) from leaving entries behind
//! that are missing fields or carry values outside the closed mood set. There
//! is no schema versioning and no migration step.
//!
//! ## Normalization Rules
//!
//! Applied when an entry is deserialized from storage:
//!
//! 1. **Mood**: anything outside the closed set (or absent) becomes
//!    [`Mood::Neutral`].
//! 2. **Tags**: absent or `null` becomes an empty list.
//! 3. **Timestamps**: a missing `created_at` becomes the load time; a
//!    `last_edited` earlier than `created_at` is clamped up to it.
//! 4. **Id**: a missing id gets a fresh UUID so the collection invariant
//!    (unique ids) holds even for hand-edited slots.
//!
//! Entries created through [`EntryDraft`] never need any of this; the rules
//! exist for data arriving from outside the normal write path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Maximum title length accepted at the input boundary.
pub const TITLE_MAX_CHARS: usize = 100;

/// Character budget for one-line content previews.
pub const PREVIEW_LENGTH: usize = 90;

/// The closed set of moods an entry can carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Productive,
    #[default]
    Neutral,
}

impl Mood {
    /// All moods, in display order.
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Productive,
        Mood::Neutral,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Productive => "Productive",
            Mood::Neutral => "Neutral",
        }
    }

    /// Exact-name lookup, as used when validating storage-sourced values.
    pub fn from_name(name: &str) -> Option<Mood> {
        Mood::ALL.iter().copied().find(|m| m.name() == name)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive parsing for user input (CLI flags).
impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown mood '{}'", s))
    }
}

/// A single journal record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JournalEntry {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub last_edited: DateTime<Utc>,
}

// Custom deserializer so that entries arriving from storage are normalized
// rather than rejected: the slot has no schema version, and external edits
// must degrade to defaults instead of failing the whole load.
impl<'de> Deserialize<'de> for JournalEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = EntryHelper::deserialize(deserializer)?;

        let created_at = helper.created_at.unwrap_or_else(Utc::now);
        let last_edited = match helper.last_edited {
            // created_at <= last_edited must hold after load
            Some(t) if t >= created_at => t,
            _ => created_at,
        };

        Ok(JournalEntry {
            id: helper.id.unwrap_or_else(Uuid::new_v4),
            title: helper.title,
            content: helper.content,
            mood: helper
                .mood
                .as_deref()
                .and_then(Mood::from_name)
                .unwrap_or_default(),
            tags: helper.tags.unwrap_or_default(),
            created_at,
            last_edited,
        })
    }
}

#[derive(Deserialize)]
struct EntryHelper {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    mood: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    last_edited: Option<DateTime<Utc>>,
}

impl JournalEntry {
    /// One-line plain-text preview of the content for list rendering.
    /// Truncated to [`PREVIEW_LENGTH`] characters with an ellipsis.
    pub fn preview(&self) -> String {
        let flat = self
            .content
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if flat.chars().count() > PREVIEW_LENGTH {
            let truncated: String = flat.chars().take(PREVIEW_LENGTH).collect();
            format!("{}…", truncated)
        } else {
            flat
        }
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// Entry fields minus id and timestamps; what the user submits.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub tags: Vec<String>,
}

impl EntryDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Parses comma-separated tag input into a clean tag list.
///
/// Tags are trimmed, empties dropped, and case-insensitive duplicates
/// removed (first occurrence wins, insertion order preserved).
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut tags = Vec::new();
    for raw in input.split(',') {
        let tag = raw.trim();
        if tag.is_empty() {
            continue;
        }
        let lower = tag.to_lowercase();
        if seen.contains(&lower) {
            continue;
        }
        seen.push(lower);
        tags.push(tag.to_string());
    }
    tags
}
