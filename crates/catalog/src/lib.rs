//! # Catalog Crate
//!
//! This crate holds the state of one streaming-catalog simulation run.
//!
//! ## Main Components
//!
//! - **types**: Domain entities (Video, Actor, User) and fixed vocabularies
//! - **store**: Keyed stores and the combined `Catalog`
//! - **rating**: Average-rating formulas for movies, shows and actors
//! - **parser**: Parsing genre/award/tier tokens
//! - **input**: Raw input document records (JSON)
//! - **index**: Building and seeding a `Catalog` from an input document
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let (catalog, actions) = Catalog::load_from_file(Path::new("input.json"))?;
//!
//! let video = catalog.videos.get("The Godfather").unwrap();
//! println!("{} has {} views", video.title, video.views);
//! ```

pub mod error;
pub mod types;
pub mod store;
pub mod rating;
pub mod parser;
pub mod input;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use input::{ActionInput, ActorInput, InputDocument, MovieInput, SeasonInput, ShowInput, UserInput};
pub use store::{ActorStore, Catalog, UserStore, VideoStore};
pub use types::{
    tokenize,
    Actor,
    Award,
    Genre,
    GenreCounters,
    Season,
    Tier,
    User,
    Video,
    VideoKind,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        let (videos, actors, users) = catalog.counts();

        assert_eq!(videos, 0);
        assert_eq!(actors, 0);
        assert_eq!(users, 0);
        for genre in Genre::ALL {
            assert_eq!(catalog.genres.get(genre), 0);
        }
    }

    #[test]
    fn test_movie_rating_updates_average() {
        let mut movie = Video::movie("M", 2000, [Genre::Drama], Vec::new(), 90);
        assert_eq!(movie.average_rating(), 0.0);

        movie.add_rating(None, 4.0).unwrap();
        movie.add_rating(None, 5.0).unwrap();

        assert_eq!(movie.average_rating(), 4.5);
        assert!(!movie.is_show());
    }

    #[test]
    fn test_show_rating_updates_average() {
        let mut show = Video::show(
            "S",
            2000,
            [Genre::Drama],
            Vec::new(),
            vec![Season::new(1, 30), Season::new(2, 30)],
        );

        show.add_rating(Some(2), 8.0).unwrap();

        // (0 + 8) / 2
        assert_eq!(show.average_rating(), 4.0);
        assert_eq!(show.duration, 60);
    }

    #[test]
    fn test_invalid_seasons_are_rejected() {
        let mut movie = Video::movie("M", 2000, [Genre::Drama], Vec::new(), 90);
        let mut show = Video::show("S", 2000, [Genre::Drama], Vec::new(), vec![Season::new(1, 30)]);

        assert!(movie.add_rating(Some(1), 5.0).is_err());
        assert!(show.add_rating(None, 5.0).is_err());
        assert!(show.add_rating(Some(0), 5.0).is_err());
        assert!(matches!(
            show.add_rating(Some(2), 5.0),
            Err(CatalogError::InvalidSeason { season: 2, .. })
        ));
        assert_eq!(show.average_rating(), 0.0);
    }

    #[test]
    fn test_user_watch_counts_every_view() {
        let mut genres = GenreCounters::new();
        let mut video = Video::movie("M", 2000, [Genre::Drama, Genre::Crime], Vec::new(), 90);
        let mut user = User::new("u", Tier::Basic);

        assert_eq!(user.watch(&mut video, &mut genres, 1), 1);
        assert_eq!(user.watch(&mut video, &mut genres, 1), 2);

        assert_eq!(video.views, 2);
        assert_eq!(genres.get(Genre::Drama), 2);
        assert_eq!(genres.get(Genre::Crime), 2);
        assert_eq!(genres.get(Genre::Comedy), 0);
    }

    #[test]
    fn test_huge_history_counts_saturate() {
        let mut genres = GenreCounters::new();
        let mut video = Video::movie("M", 2000, [Genre::Drama], Vec::new(), 90);
        let mut user = User::new("u", Tier::Basic);

        user.watch(&mut video, &mut genres, u32::MAX - 1);
        assert_eq!(user.watch(&mut video, &mut genres, 5), u32::MAX);

        assert_eq!(video.views, u32::MAX);
        assert_eq!(genres.get(Genre::Drama), u32::MAX);
    }

    #[test]
    fn test_user_rate_records_keys() {
        let mut show = Video::show(
            "S",
            2000,
            [Genre::Drama],
            Vec::new(),
            vec![Season::new(1, 30), Season::new(2, 30)],
        );
        let mut user = User::new("u", Tier::Premium);

        user.rate(&mut show, Some(1), 6.0).unwrap();

        assert!(user.has_rated("S", Some(1)));
        assert!(!user.has_rated("S", Some(2)));
        assert!(!user.has_rated("S", None));
        assert_eq!(user.rating_count, 1);
    }

    #[test]
    fn test_actor_description_words() {
        let actor = Actor::new(
            "A",
            "Born in New-York, she starred in Film.Noir classics!",
            Vec::new(),
            HashMap::new(),
        );
        let words = actor.description_words();

        assert!(words.contains("new"));
        assert!(words.contains("york"));
        assert!(words.contains("noir"));
        assert!(words.contains("born"));
        assert!(!words.contains("classics!"));
    }

    #[test]
    fn test_genre_ranking_most_viewed_first() {
        let mut genres = GenreCounters::new();
        genres.add(Genre::Comedy, 5);
        genres.add(Genre::Horror, 9);
        genres.add(Genre::Drama, 5);

        let ranked = genres.ranked_by_views();
        assert_eq!(ranked.len(), Genre::ALL.len());
        assert_eq!(ranked[0], Genre::Horror);
        // equal counters: later-declared genre first
        assert_eq!(ranked[1], Genre::Comedy);
        assert_eq!(ranked[2], Genre::Drama);
    }
}
