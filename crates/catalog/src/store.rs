//! Catalog stores - the in-memory database one simulation run works on.
//!
//! Four independent keyed collections:
//! - `VideoStore`: keyed by title, iterates in load order
//! - `ActorStore`: keyed by name
//! - `UserStore`: keyed by username
//! - `GenreCounters`: view counter per genre tag
//!
//! Actor and user iteration order is unspecified; every consumer that
//! needs an order sorts explicitly.

use crate::rating;
use crate::types::{Actor, GenreCounters, User, Video};
use std::collections::HashMap;

/// Videos with O(1) title lookup and load-order iteration
#[derive(Debug, Default, Clone)]
pub struct VideoStore {
    videos: Vec<Video>,
    by_title: HashMap<String, usize>,
}

impl VideoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a video at the end of the catalog order.
    ///
    /// A video with an already-known title replaces the old one in place,
    /// keeping its original position. Returns true if that happened.
    pub fn insert(&mut self, video: Video) -> bool {
        match self.by_title.get(&video.title) {
            Some(&position) => {
                self.videos[position] = video;
                true
            }
            None => {
                self.by_title.insert(video.title.clone(), self.videos.len());
                self.videos.push(video);
                false
            }
        }
    }

    pub fn get(&self, title: &str) -> Option<&Video> {
        self.by_title.get(title).map(|&position| &self.videos[position])
    }

    pub fn get_mut(&mut self, title: &str) -> Option<&mut Video> {
        self.by_title
            .get(title)
            .map(|&position| &mut self.videos[position])
    }

    pub fn contains(&self, title: &str) -> bool {
        self.by_title.contains_key(title)
    }

    /// All videos in catalog (load) order
    pub fn iter(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter()
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Actors keyed by name
#[derive(Debug, Default, Clone)]
pub struct ActorStore {
    actors: HashMap<String, Actor>,
}

impl ActorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an actor with the same name was replaced
    pub fn insert(&mut self, actor: Actor) -> bool {
        self.actors.insert(actor.name.clone(), actor).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Actor> {
        self.actors.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

/// Users keyed by username
#[derive(Debug, Default, Clone)]
pub struct UserStore {
    users: HashMap<String, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a user with the same username was replaced
    pub fn insert(&mut self, user: User) -> bool {
        self.users.insert(user.username.clone(), user).is_some()
    }

    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub fn get_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.get_mut(username)
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// The combined stores for one simulation run.
///
/// Fields are public so handlers can borrow several stores mutably at once
/// (a `view` touches a user, a video and the genre counters together).
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    pub videos: VideoStore,
    pub actors: ActorStore,
    pub users: UserStore,
    pub genres: GenreCounters,
}

impl Catalog {
    /// Creates a new, empty Catalog with every genre counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current average rating of an actor's filmography
    pub fn actor_average(&self, actor: &Actor) -> f64 {
        rating::actor_average(actor, &self.videos)
    }

    /// (videos, actors, users) counts for debugging/validation
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.videos.len(), self.actors.len(), self.users.len())
    }
}
