//! Core traits for the ranking pipeline.
//!
//! `Filter` lets eligibility rules be composed into a `RankingPipeline`;
//! `Ranked` gives every rankable entity the name used to break ties.

use catalog::{Actor, User, Video};

/// Eligibility rule applied to a ranking candidate.
///
/// ## Design Note
/// - `Send + Sync` keeps pipelines shareable across threads
/// - Filters only inspect candidates; the pipeline owns the sequence
pub trait Filter<T>: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// True if `item` should stay in the sequence
    fn matches(&self, item: &T) -> bool;
}

/// Anything a ranking query can order.
///
/// The name is the tie-break key: ties on the primary key are ordered by
/// ascending name, so no two distinct entities ever compare equal.
pub trait Ranked {
    fn rank_name(&self) -> &str;
}

impl Ranked for Video {
    fn rank_name(&self) -> &str {
        &self.title
    }
}

impl Ranked for Actor {
    fn rank_name(&self) -> &str {
        &self.name
    }
}

impl Ranked for User {
    fn rank_name(&self) -> &str {
        &self.username
    }
}

/// An actor paired with the average rating computed for the current query
#[derive(Debug, Clone, Copy)]
pub struct ScoredActor<'a> {
    pub actor: &'a Actor,
    pub average: f64,
}

impl Ranked for ScoredActor<'_> {
    fn rank_name(&self) -> &str {
        &self.actor.name
    }
}
