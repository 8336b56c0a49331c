//! Input document records.
//!
//! One JSON document carries the whole simulation: the catalog contents
//! and the ordered list of actions to replay against it. These structs are
//! the raw, untyped shape; `index` turns them into a `Catalog` and the
//! engine turns `ActionInput` into typed actions.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDocument {
    pub actors: Vec<ActorInput>,
    pub users: Vec<UserInput>,
    pub movies: Vec<MovieInput>,
    pub shows: Vec<ShowInput>,
    pub actions: Vec<ActionInput>,
}

impl InputDocument {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieInput {
    #[serde(rename = "name")]
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub duration: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowInput {
    #[serde(rename = "name")]
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub seasons: Vec<SeasonInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonInput {
    #[serde(rename = "current_season")]
    pub number: u32,
    pub duration: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorInput {
    pub name: String,
    #[serde(rename = "career_description", default)]
    pub description: String,
    #[serde(default)]
    pub filmography: Vec<String>,
    /// Award name -> how many times it was received
    #[serde(default)]
    pub awards: HashMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInput {
    pub username: String,
    pub subscription: String,
    /// Title -> number of views already made before the simulation
    #[serde(default)]
    pub history: HashMap<String, u32>,
    #[serde(rename = "favoriteMovies", default)]
    pub favorites: Vec<String>,
}

/// One action record, exactly as it appears in the document.
///
/// Which fields matter depends on `action_type` and its sub-kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionInput {
    pub action_id: u32,
    pub action_type: String,
    /// Sub-kind for commands and recommendations
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "user")]
    pub username: Option<String>,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub object_type: Option<String>,
    pub sort_type: Option<String>,
    /// Sub-kind for queries
    pub criteria: Option<String>,
    pub number: Option<usize>,
    pub grade: Option<f64>,
    /// 0 or absent for movies
    pub season: Option<u32>,
    /// Positional filter lists: [0] year, [1] genres, [2] words, [3] awards
    pub filters: Option<Vec<Option<Vec<Option<String>>>>>,
}
