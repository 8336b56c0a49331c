//! Catalog building and seeding logic.
//!
//! Turns an `InputDocument` into a `Catalog`:
//! - Build the video store (movies first, then shows) and the actor store
//! - Seed each user's favorites and viewing history, which bumps the same
//!   video and genre counters a live `favorite`/`view` command would

use crate::error::{CatalogError, Result};
use crate::input::{ActionInput, ActorInput, InputDocument, MovieInput, ShowInput, UserInput};
use crate::parser::parse_genres;
use crate::store::{ActorStore, Catalog, UserStore, VideoStore};
use crate::types::{Actor, Award, GenreCounters, Season, Tier, User, Video};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

impl Catalog {
    /// Load a catalog and its action list from a JSON input document
    pub fn load_from_file(path: &Path) -> Result<(Self, Vec<ActionInput>)> {
        info!("Loading simulation input from {:?}", path);
        let document = InputDocument::from_path(path)?;
        Self::from_document(document)
    }

    /// Build the catalog from a parsed document, handing back its actions
    ///
    /// Steps:
    /// 1. Build videos and actors IN PARALLEL (they don't depend on each other)
    /// 2. Seed users against the finished video store
    pub fn from_document(document: InputDocument) -> Result<(Self, Vec<ActionInput>)> {
        let InputDocument {
            actors,
            users,
            movies,
            shows,
            actions,
        } = document;

        let (videos, actors) = rayon::join(
            || build_videos(&movies, &shows),
            || build_actors(&actors),
        );

        let mut catalog = Catalog {
            videos: videos?,
            actors: actors?,
            users: UserStore::new(),
            genres: GenreCounters::new(),
        };

        for user in &users {
            catalog.seed_user(user)?;
        }

        let (videos, actors, users) = catalog.counts();
        info!(
            "Loaded {} videos, {} actors, {} users, {} actions",
            videos,
            actors,
            users,
            actions.len()
        );
        Ok((catalog, actions))
    }

    /// Insert a user, replaying their initial favorites and viewing history.
    ///
    /// A username that is already seeded is rejected before any counter moves.
    pub fn seed_user(&mut self, input: &UserInput) -> Result<()> {
        if self.users.get(&input.username).is_some() {
            return Err(CatalogError::DuplicateKey {
                entity: "user".to_string(),
                key: input.username.clone(),
            });
        }

        let tier = input.subscription.parse::<Tier>()?;
        let mut user = User::new(input.username.as_str(), tier);

        for title in &input.favorites {
            let video = self
                .videos
                .get_mut(title)
                .ok_or_else(|| missing_video(title))?;
            user.add_favorite(video);
        }

        for (title, &views) in &input.history {
            let video = self
                .videos
                .get_mut(title)
                .ok_or_else(|| missing_video(title))?;
            user.watch(video, &mut self.genres, views);
        }

        debug!(
            "Seeded user {} ({} favorites, {} viewed)",
            user.username,
            user.favorites.len(),
            user.viewed.len()
        );
        self.users.insert(user);
        Ok(())
    }
}

fn missing_video(title: &str) -> CatalogError {
    CatalogError::MissingReference {
        entity: "video".to_string(),
        key: title.to_string(),
    }
}

/// Build the video store: all movies in order, then all shows in order
fn build_videos(movies: &[MovieInput], shows: &[ShowInput]) -> Result<VideoStore> {
    let mut store = VideoStore::new();

    for movie in movies {
        let video = Video::movie(
            movie.title.as_str(),
            movie.year,
            parse_genres(&movie.genres)?,
            movie.cast.iter().cloned(),
            movie.duration,
        );
        if store.insert(video) {
            warn!("Duplicate video title {}, keeping the last record", movie.title);
        }
    }

    for show in shows {
        let seasons = show
            .seasons
            .iter()
            .map(|season| Season::new(season.number, season.duration))
            .collect();
        let video = Video::show(
            show.title.as_str(),
            show.year,
            parse_genres(&show.genres)?,
            show.cast.iter().cloned(),
            seasons,
        );
        if store.insert(video) {
            warn!("Duplicate video title {}, keeping the last record", show.title);
        }
    }

    Ok(store)
}

fn build_actors(actors: &[ActorInput]) -> Result<ActorStore> {
    let mut store = ActorStore::new();

    for actor in actors {
        let awards = actor
            .awards
            .iter()
            .map(|(name, &count)| Ok((name.parse::<Award>()?, count)))
            .collect::<Result<HashMap<Award, u32>>>()?;

        let entry = Actor::new(
            actor.name.as_str(),
            actor.description.as_str(),
            actor.filmography.iter().cloned(),
            awards,
        );
        if store.insert(entry) {
            warn!("Duplicate actor {}, keeping the last record", actor.name);
        }
    }

    Ok(store)
}
