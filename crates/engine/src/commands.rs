//! Command handlers: the only actions that mutate the catalog.

use crate::action::Command;
use crate::outcome::{ActionError, Response, Success};
use catalog::{Catalog, User, Video};
use tracing::debug;

pub fn execute(catalog: &mut Catalog, command: &Command) -> Response {
    match command {
        Command::Favorite { user, title } => favorite(catalog, user, title),
        Command::View { user, title } => view(catalog, user, title),
        Command::Rate {
            user,
            title,
            grade,
            season,
        } => rate(catalog, user, title, *grade, *season),
    }
}

/// Mark a viewed video as one of the user's favorites
pub fn favorite(catalog: &mut Catalog, username: &str, title: &str) -> Response {
    let Catalog { videos, users, .. } = catalog;
    let (user, video) = resolve(users.get_mut(username), videos.get_mut(title), username, title)?;

    if user.favorites.contains(title) {
        return Err(ActionError::AlreadyFavorite {
            title: title.to_string(),
        });
    }
    if !user.has_viewed(title) {
        return Err(ActionError::NotSeen {
            title: title.to_string(),
        });
    }

    user.add_favorite(video);
    debug!(user = username, title, favorites = video.favorites, "Favorite added");
    Ok(Success::Favorited {
        title: title.to_string(),
    })
}

/// Watch a video once. Always succeeds for known users and videos.
pub fn view(catalog: &mut Catalog, username: &str, title: &str) -> Response {
    let Catalog {
        videos,
        users,
        genres,
        ..
    } = catalog;
    let (user, video) = resolve(users.get_mut(username), videos.get_mut(title), username, title)?;

    let views = user.watch(video, genres, 1);
    debug!(user = username, title, views, total = video.views, "Video viewed");
    Ok(Success::Viewed {
        title: title.to_string(),
        views,
    })
}

/// Rate a movie (`season == None`) or one season of a show
pub fn rate(
    catalog: &mut Catalog,
    username: &str,
    title: &str,
    grade: f64,
    season: Option<u32>,
) -> Response {
    let Catalog { videos, users, .. } = catalog;
    let (user, video) = resolve(users.get_mut(username), videos.get_mut(title), username, title)?;

    if !user.has_viewed(title) {
        return Err(ActionError::NotSeen {
            title: title.to_string(),
        });
    }
    if user.has_rated(title, season) {
        return Err(ActionError::AlreadyRated {
            title: title.to_string(),
        });
    }

    user.rate(video, season, grade)
        .map_err(|_| ActionError::InvalidSeason {
            title: title.to_string(),
            season: season.unwrap_or(0),
        })?;

    debug!(
        user = username,
        title,
        grade,
        average = video.average_rating(),
        "Video rated"
    );
    Ok(Success::Rated {
        title: title.to_string(),
        grade,
        user: username.to_string(),
    })
}

fn resolve<'a>(
    user: Option<&'a mut User>,
    video: Option<&'a mut Video>,
    username: &str,
    title: &str,
) -> Result<(&'a mut User, &'a mut Video), ActionError> {
    let user = user.ok_or_else(|| ActionError::UnknownUser {
        username: username.to_string(),
    })?;
    let video = video.ok_or_else(|| ActionError::UnknownVideo {
        title: title.to_string(),
    })?;
    Ok((user, video))
}
