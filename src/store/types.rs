//! Core domain type definitions.
//!
//! Defines [`User`], [`HabitDefinition`], [`JournalEntry`], and the [`Mood`]
//! scale. Habit completions have no struct of their own: a completion is a
//! row keyed by (habit, date) whose presence *is* the completed state, and
//! views return plain dates or booleans derived from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An account. Created on first login; login is find-or-create by email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// UUID v7 (time-sortable) primary key.
    pub id: String,
    /// Display name, e.g. `"Ana Souza"`.
    pub name: String,
    /// Unique login email. No passwords — identity is trusted as given.
    pub email: String,
    /// The user's stated objective (e.g. `"sleep better"`), if set.
    pub main_goal: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// A recurring habit a user intends to track, independent of any specific day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitDefinition {
    /// UUID v7 primary key.
    pub id: String,
    /// Owning user. Deleting the user cascades to definitions and completions.
    pub user_id: String,
    /// Display name, e.g. `"Drink water"`.
    pub name: String,
    /// Icon reference, typically a single emoji.
    pub icon: String,
    /// RFC 3339 creation timestamp. Listings preserve creation order.
    pub created_at: String,
}

/// One mood journal entry. Multiple entries per day are allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub mood: Mood,
    /// Optional free text accompanying the mood.
    pub content: Option<String>,
    pub created_at: String,
}

/// The five-step mood scale for journal entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Good,
    Neutral,
    Bad,
    Sad,
}

impl Mood {
    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Good => "good",
            Self::Neutral => "neutral",
            Self::Bad => "bad",
            Self::Sad => "sad",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(Self::Happy),
            "good" => Ok(Self::Good),
            "neutral" => Ok(Self::Neutral),
            "bad" => Ok(Self::Bad),
            "sad" => Ok(Self::Sad),
            _ => Err(format!("unknown mood: {s}. Expected happy, good, neutral, bad, or sad")),
        }
    }
}
