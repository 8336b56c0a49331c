//! Action outcomes and their rendered messages.
//!
//! Every action produces a `Response`: either a `Success` or an
//! `ActionError`. Both render through `Display`, so the output record is
//! just the response's message paired with the action id.

use crate::action::Strategy;
use catalog::Genre;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// What a successful action reports
#[derive(Debug, Clone, PartialEq)]
pub enum Success {
    Favorited { title: String },
    /// `views` is the user's own view count for the title
    Viewed { title: String, views: u32 },
    Rated { title: String, grade: f64, user: String },
    QueryResult(Vec<String>),
    Recommended { strategy: Strategy, title: String },
    SearchResult(Vec<String>),
}

impl fmt::Display for Success {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Success::Favorited { title } => {
                write!(f, "success -> {title} was added as favourite")
            }
            Success::Viewed { title, views } => {
                write!(f, "success -> {title} was viewed with total views of {views}")
            }
            Success::Rated { title, grade, user } => {
                write!(f, "success -> {title} was rated with {} by {user}", format_grade(*grade))
            }
            Success::QueryResult(names) => write!(f, "Query result: {}", render_list(names)),
            Success::Recommended { strategy, title } => {
                write!(f, "{}Recommendation result: {title}", strategy.label())
            }
            Success::SearchResult(titles) => {
                write!(f, "SearchRecommendation result: {}", render_list(titles))
            }
        }
    }
}

/// Why an action was rejected. The `Display` text is the output message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("error -> {title} is not seen")]
    NotSeen { title: String },

    #[error("error -> {title} is already in favourite list")]
    AlreadyFavorite { title: String },

    #[error("error -> {title} has been already rated")]
    AlreadyRated { title: String },

    #[error("{}Recommendation cannot be applied!", .strategy.label())]
    CannotApply { strategy: Strategy },

    #[error("SearchRecommendation cannot be applied!")]
    EmptySearchResult { genre: Option<Genre> },

    #[error("error -> user {username} does not exist")]
    UnknownUser { username: String },

    #[error("error -> video {title} does not exist")]
    UnknownVideo { title: String },

    #[error("error -> {title} has no season {season}")]
    InvalidSeason { title: String, season: u32 },

    /// Action kinds the engine does not handle render as an empty message
    #[error("")]
    Unsupported { action_type: String, sub_kind: String },
}

pub type Response = std::result::Result<Success, ActionError>;

/// One line of the output document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutput {
    pub id: u32,
    pub message: String,
}

impl ActionOutput {
    pub fn new(id: u32, response: &Response) -> Self {
        let message = match response {
            Ok(success) => success.to_string(),
            Err(error) => error.to_string(),
        };
        Self { id, message }
    }
}

/// Grades always print with a fractional part: `3.0`, `4.5`
pub fn format_grade(grade: f64) -> String {
    format!("{grade:?}")
}

/// `[a, b, c]`, or `[]` when empty
pub fn render_list<S: AsRef<str>>(items: &[S]) -> String {
    let joined: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    format!("[{}]", joined.join(", "))
}
