//! Rating aggregation formulas.
//!
//! Video averages are cached on the video and recomputed after every new
//! rating. Actor averages are never cached: they depend on the current state
//! of every video in the filmography.

use crate::store::VideoStore;
use crate::types::{Actor, Season};

/// Arithmetic mean, 0 for an empty list
pub fn mean(ratings: &[f64]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    ratings.iter().sum::<f64>() / ratings.len() as f64
}

pub fn movie_average(ratings: &[f64]) -> f64 {
    mean(ratings)
}

/// Sum of season means divided by the total season count.
///
/// Unrated seasons contribute 0 to the sum but still count in the divisor.
pub fn show_average(seasons: &[Season]) -> f64 {
    if seasons.is_empty() {
        return 0.0;
    }
    let total: f64 = seasons.iter().map(|season| mean(&season.ratings)).sum();
    total / seasons.len() as f64
}

/// Mean of the actor's rated videos (average > 0), 0 if none qualify.
///
/// Filmography titles missing from the store are skipped.
pub fn actor_average(actor: &Actor, videos: &VideoStore) -> f64 {
    let rated: Vec<f64> = actor
        .filmography
        .iter()
        .filter_map(|title| videos.get(title))
        .map(|video| video.average_rating())
        .filter(|&average| average > 0.0)
        .collect();

    mean(&rated)
}
