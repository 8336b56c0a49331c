//! Core domain types for the streaming catalog.
//!
//! This module defines the entities every action reads or mutates:
//! - Fixed vocabularies (Genre, Award, Tier)
//! - Videos, as a tagged Movie/Show variant with kind-specific rating payloads
//! - Actors and their award counters
//! - Users and their viewing, favorite and rating history

use crate::error::{CatalogError, Result};
use crate::rating;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

// =============================================================================
// Fixed vocabularies
// =============================================================================

/// Genre tags a video can carry.
///
/// The declaration order is the canonical order used whenever genres are
/// enumerated (genre counters, popularity ranking).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Drama,
    Comedy,
    Crime,
    Romance,
    War,
    History,
    Thriller,
    Mystery,
    Family,
    Horror,
    Fantasy,
    ScienceFiction,
    ActionAdventure,
    SciFiFantasy,
    Animation,
    Kids,
    Western,
    TvMovie,
}

impl Genre {
    pub const ALL: [Genre; 20] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Drama,
        Genre::Comedy,
        Genre::Crime,
        Genre::Romance,
        Genre::War,
        Genre::History,
        Genre::Thriller,
        Genre::Mystery,
        Genre::Family,
        Genre::Horror,
        Genre::Fantasy,
        Genre::ScienceFiction,
        Genre::ActionAdventure,
        Genre::SciFiFantasy,
        Genre::Animation,
        Genre::Kids,
        Genre::Western,
        Genre::TvMovie,
    ];

    /// Display name, used only when rendering output
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Drama => "Drama",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Romance => "Romance",
            Genre::War => "War",
            Genre::History => "History",
            Genre::Thriller => "Thriller",
            Genre::Mystery => "Mystery",
            Genre::Family => "Family",
            Genre::Horror => "Horror",
            Genre::Fantasy => "Fantasy",
            Genre::ScienceFiction => "Science Fiction",
            Genre::ActionAdventure => "Action & Adventure",
            Genre::SciFiFantasy => "Sci-Fi & Fantasy",
            Genre::Animation => "Animation",
            Genre::Kids => "Kids",
            Genre::Western => "Western",
            Genre::TvMovie => "TV Movie",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Award kinds counted per actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Award {
    BestScreenplay,
    BestSupportingActor,
    BestDirector,
    BestPerformance,
    PeopleChoiceAward,
}

impl Award {
    pub fn as_str(self) -> &'static str {
        match self {
            Award::BestScreenplay => "BEST_SCREENPLAY",
            Award::BestSupportingActor => "BEST_SUPPORTING_ACTOR",
            Award::BestDirector => "BEST_DIRECTOR",
            Award::BestPerformance => "BEST_PERFORMANCE",
            Award::PeopleChoiceAward => "PEOPLE_CHOICE_AWARD",
        }
    }
}

/// Subscription tier, fixed at load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Basic,
    Premium,
}

// =============================================================================
// Videos
// =============================================================================

/// One season of a show, rated independently of the others
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub number: u32,
    pub duration: u32,
    pub ratings: Vec<f64>,
}

impl Season {
    pub fn new(number: u32, duration: u32) -> Self {
        Self {
            number,
            duration,
            ratings: Vec::new(),
        }
    }
}

/// Kind-specific payload of a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VideoKind {
    /// One rating per user-rating event, in insertion order
    Movie { ratings: Vec<f64> },
    /// Seasons in order; season `n` lives at index `n - 1`
    Show { seasons: Vec<Season> },
}

/// A movie or a show in the catalog, keyed by title.
///
/// The rating payload is private so the cached average can only change
/// through [`Video::add_rating`], which recomputes it immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    pub year: i32,
    pub genres: HashSet<Genre>,
    pub cast: HashSet<String>,
    /// Minutes; for shows, the sum of all season durations
    pub duration: u32,
    pub views: u32,
    pub favorites: u32,
    average_rating: f64,
    kind: VideoKind,
}

impl Video {
    pub fn movie(
        title: impl Into<String>,
        year: i32,
        genres: impl IntoIterator<Item = Genre>,
        cast: impl IntoIterator<Item = String>,
        duration: u32,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            genres: genres.into_iter().collect(),
            cast: cast.into_iter().collect(),
            duration,
            views: 0,
            favorites: 0,
            average_rating: 0.0,
            kind: VideoKind::Movie {
                ratings: Vec::new(),
            },
        }
    }

    pub fn show(
        title: impl Into<String>,
        year: i32,
        genres: impl IntoIterator<Item = Genre>,
        cast: impl IntoIterator<Item = String>,
        seasons: Vec<Season>,
    ) -> Self {
        let duration = seasons.iter().map(|s| s.duration).sum();
        Self {
            title: title.into(),
            year,
            genres: genres.into_iter().collect(),
            cast: cast.into_iter().collect(),
            duration,
            views: 0,
            favorites: 0,
            average_rating: 0.0,
            kind: VideoKind::Show { seasons },
        }
    }

    pub fn kind(&self) -> &VideoKind {
        &self.kind
    }

    pub fn is_show(&self) -> bool {
        matches!(self.kind, VideoKind::Show { .. })
    }

    pub fn average_rating(&self) -> f64 {
        self.average_rating
    }

    /// True if the video carries at least one of `genres`
    pub fn has_any_genre(&self, genres: &[Genre]) -> bool {
        genres.iter().any(|genre| self.genres.contains(genre))
    }

    /// Whether a rating event with this season number targets something real.
    ///
    /// Movies take `None`; shows take `Some(n)` with `1 <= n <= seasons`.
    pub fn accepts_season(&self, season: Option<u32>) -> bool {
        match (&self.kind, season) {
            (VideoKind::Movie { .. }, None) => true,
            (VideoKind::Show { seasons }, Some(n)) => n >= 1 && (n as usize) <= seasons.len(),
            _ => false,
        }
    }

    /// Append a grade and recompute the cached average
    pub fn add_rating(&mut self, season: Option<u32>, grade: f64) -> Result<()> {
        let target = match (&mut self.kind, season) {
            (VideoKind::Movie { ratings }, None) => Some(ratings),
            (VideoKind::Show { seasons }, Some(n)) if n >= 1 => seasons
                .get_mut(n as usize - 1)
                .map(|season| &mut season.ratings),
            _ => None,
        };

        match target {
            Some(ratings) => ratings.push(grade),
            None => {
                return Err(CatalogError::InvalidSeason {
                    title: self.title.clone(),
                    season: season.unwrap_or(0),
                });
            }
        }
        self.recompute_average();
        Ok(())
    }

    fn recompute_average(&mut self) {
        self.average_rating = match &self.kind {
            VideoKind::Movie { ratings } => rating::movie_average(ratings),
            VideoKind::Show { seasons } => rating::show_average(seasons),
        };
    }
}

// =============================================================================
// Actors
// =============================================================================

/// An actor, with a filmography of titles resolved against the video store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub description: String,
    pub filmography: HashSet<String>,
    pub awards: HashMap<Award, u32>,
    /// Sum of all award counters, computed once at construction
    pub total_awards: u32,
}

impl Actor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        filmography: impl IntoIterator<Item = String>,
        awards: HashMap<Award, u32>,
    ) -> Self {
        let total_awards = awards.values().sum();
        Self {
            name: name.into(),
            description: description.into(),
            filmography: filmography.into_iter().collect(),
            awards,
            total_awards,
        }
    }

    pub fn has_all_awards(&self, required: &[Award]) -> bool {
        required.iter().all(|award| self.awards.contains_key(award))
    }

    /// Lowercased words of the career description, punctuation stripped
    pub fn description_words(&self) -> HashSet<String> {
        tokenize(&self.description)
    }
}

/// Split text into lowercase alphanumeric words
pub fn tokenize(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect()
}

// =============================================================================
// Users
// =============================================================================

/// A subscriber and everything they have done so far
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub tier: Tier,
    pub favorites: HashSet<String>,
    /// Title -> how many times this user viewed it
    pub viewed: HashMap<String, u32>,
    pub rated_movies: HashSet<String>,
    /// (title, season number) pairs already rated
    pub rated_seasons: HashSet<(String, u32)>,
    pub rating_count: u32,
}

impl User {
    pub fn new(username: impl Into<String>, tier: Tier) -> Self {
        Self {
            username: username.into(),
            tier,
            favorites: HashSet::new(),
            viewed: HashMap::new(),
            rated_movies: HashSet::new(),
            rated_seasons: HashSet::new(),
            rating_count: 0,
        }
    }

    pub fn is_premium(&self) -> bool {
        self.tier == Tier::Premium
    }

    pub fn has_viewed(&self, title: &str) -> bool {
        self.viewed.contains_key(title)
    }

    pub fn view_count(&self, title: &str) -> u32 {
        self.viewed.get(title).copied().unwrap_or(0)
    }

    /// Whether this user already rated the movie (`None`) or the show season
    pub fn has_rated(&self, title: &str, season: Option<u32>) -> bool {
        match season {
            None => self.rated_movies.contains(title),
            Some(n) => self.rated_seasons.contains(&(title.to_string(), n)),
        }
    }

    /// Watch `video` `times` times, bumping the video's and its genres' counters.
    ///
    /// Returns this user's new view count for the video.
    pub fn watch(&mut self, video: &mut Video, genres: &mut GenreCounters, times: u32) -> u32 {
        video.views = video.views.saturating_add(times);
        for &genre in &video.genres {
            genres.add(genre, times);
        }

        let count = self.viewed.entry(video.title.clone()).or_insert(0);
        *count = count.saturating_add(times);
        *count
    }

    pub fn add_favorite(&mut self, video: &mut Video) {
        self.favorites.insert(video.title.clone());
        video.favorites = video.favorites.saturating_add(1);
    }

    /// Record a rating event, updating the video's average
    pub fn rate(&mut self, video: &mut Video, season: Option<u32>, grade: f64) -> Result<()> {
        video.add_rating(season, grade)?;

        match season {
            None => {
                self.rated_movies.insert(video.title.clone());
            }
            Some(n) => {
                self.rated_seasons.insert((video.title.clone(), n));
            }
        }
        self.rating_count += 1;
        Ok(())
    }
}

// =============================================================================
// Genre counters
// =============================================================================

/// View counters for every known genre, all starting at zero
#[derive(Debug, Clone)]
pub struct GenreCounters {
    counts: HashMap<Genre, u32>,
}

impl GenreCounters {
    pub fn new() -> Self {
        Self {
            counts: Genre::ALL.iter().map(|&genre| (genre, 0)).collect(),
        }
    }

    pub fn get(&self, genre: Genre) -> u32 {
        self.counts.get(&genre).copied().unwrap_or(0)
    }

    pub fn add(&mut self, genre: Genre, views: u32) {
        let count = self.counts.entry(genre).or_insert(0);
        *count = count.saturating_add(views);
    }

    /// All genres, most viewed first.
    ///
    /// Genres are stably sorted ascending by views starting from the
    /// declaration order, then reversed, so among equal counters the
    /// later-declared genre comes first.
    pub fn ranked_by_views(&self) -> Vec<Genre> {
        let mut genres = Genre::ALL.to_vec();
        genres.sort_by_key(|&genre| self.get(genre));
        genres.reverse();
        genres
    }
}

impl Default for GenreCounters {
    fn default() -> Self {
        Self::new()
    }
}
