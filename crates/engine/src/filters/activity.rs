//! Filters on what has happened to an entity during the run.
//!
//! Rating, favorite and view rankings only list entities that have at
//! least one of the counted events.

use crate::traits::{Filter, ScoredActor};
use catalog::{User, Video};

/// Keeps videos with an average rating above zero
pub struct RatedFilter;

impl Filter<Video> for RatedFilter {
    fn name(&self) -> &str {
        "RatedFilter"
    }

    fn matches(&self, video: &Video) -> bool {
        video.average_rating() > 0.0
    }
}

/// Keeps videos favorited at least once
pub struct FavoritedFilter;

impl Filter<Video> for FavoritedFilter {
    fn name(&self) -> &str {
        "FavoritedFilter"
    }

    fn matches(&self, video: &Video) -> bool {
        video.favorites > 0
    }
}

/// Keeps videos viewed at least once
pub struct ViewedFilter;

impl Filter<Video> for ViewedFilter {
    fn name(&self) -> &str {
        "ViewedFilter"
    }

    fn matches(&self, video: &Video) -> bool {
        video.views > 0
    }
}

/// Keeps users who have given at least one rating
pub struct ActiveRaterFilter;

impl Filter<User> for ActiveRaterFilter {
    fn name(&self) -> &str {
        "ActiveRaterFilter"
    }

    fn matches(&self, user: &User) -> bool {
        user.rating_count > 0
    }
}

/// Keeps actors whose filmography average is above zero
pub struct RatedActorFilter;

impl<'a> Filter<ScoredActor<'a>> for RatedActorFilter {
    fn name(&self) -> &str {
        "RatedActorFilter"
    }

    fn matches(&self, scored: &ScoredActor<'a>) -> bool {
        scored.average > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Actor, Genre, Tier};
    use std::collections::HashMap;

    #[test]
    fn test_video_activity_filters() {
        let mut video = Video::movie("M", 2000, [Genre::Drama], Vec::new(), 90);
        assert!(!RatedFilter.matches(&video));
        assert!(!FavoritedFilter.matches(&video));
        assert!(!ViewedFilter.matches(&video));

        video.add_rating(None, 3.0).unwrap();
        video.favorites = 1;
        video.views = 4;

        assert!(RatedFilter.matches(&video));
        assert!(FavoritedFilter.matches(&video));
        assert!(ViewedFilter.matches(&video));
    }

    #[test]
    fn test_active_rater_filter() {
        let mut user = User::new("u", Tier::Basic);
        assert!(!ActiveRaterFilter.matches(&user));
        user.rating_count = 2;
        assert!(ActiveRaterFilter.matches(&user));
    }

    #[test]
    fn test_rated_actor_filter() {
        let actor = Actor::new("A", "", Vec::new(), HashMap::new());
        assert!(!RatedActorFilter.matches(&ScoredActor { actor: &actor, average: 0.0 }));
        assert!(RatedActorFilter.matches(&ScoredActor { actor: &actor, average: 0.5 }));
    }
}
