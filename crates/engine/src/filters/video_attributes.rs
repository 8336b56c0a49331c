//! Filters on a video's static attributes: kind, year and genres.
//!
//! These implement the optional restrictions a video query carries.

use crate::action::VideoClass;
use crate::traits::Filter;
use catalog::{Genre, Video};

/// Keeps only movies or only shows. Every video query adds this one.
pub struct KindFilter {
    class: VideoClass,
}

impl KindFilter {
    pub fn new(class: VideoClass) -> Self {
        Self { class }
    }
}

impl Filter<Video> for KindFilter {
    fn name(&self) -> &str {
        "KindFilter"
    }

    fn matches(&self, video: &Video) -> bool {
        self.class.includes(video)
    }
}

/// Keeps videos released in exactly one year
pub struct YearFilter {
    year: i32,
}

impl YearFilter {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Filter<Video> for YearFilter {
    fn name(&self) -> &str {
        "YearFilter"
    }

    fn matches(&self, video: &Video) -> bool {
        video.year == self.year
    }
}

/// Keeps videos sharing at least one genre with the requested list.
///
/// This is an intersection test, not a subset test: a Drama/Crime video
/// passes a [Crime, Comedy] filter.
pub struct GenreFilter {
    genres: Vec<Genre>,
}

impl GenreFilter {
    pub fn new(genres: Vec<Genre>) -> Self {
        Self { genres }
    }
}

impl Filter<Video> for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, video: &Video) -> bool {
        video.has_any_genre(&self.genres)
    }
}
