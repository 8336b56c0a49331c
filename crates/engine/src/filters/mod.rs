//! Filter implementations for the ranking pipeline.
//!
//! This module contains all the concrete filters that can be composed
//! into a RankingPipeline.

pub mod activity;
pub mod actor_profile;
pub mod video_attributes;

// Re-export for convenience
pub use activity::{ActiveRaterFilter, FavoritedFilter, RatedActorFilter, RatedFilter, ViewedFilter};
pub use actor_profile::{AwardsFilter, DescriptionFilter};
pub use video_attributes::{GenreFilter, KindFilter, YearFilter};
