//! Recommendation selectors.
//!
//! Each strategy is a single scan over the videos in catalog order,
//! skipping everything the user has already viewed. Only `Standard` and
//! `BestUnseen` are open to basic subscribers.

use crate::action::{Recommendation, Strategy};
use crate::outcome::{ActionError, Response, Success};
use catalog::{Catalog, Genre, User, Video};
use tracing::debug;

pub fn execute(catalog: &Catalog, recommendation: &Recommendation) -> Response {
    let strategy = recommendation.strategy;
    let user = catalog
        .users
        .get(&recommendation.user)
        .ok_or_else(|| ActionError::UnknownUser {
            username: recommendation.user.clone(),
        })?;

    if strategy.requires_premium() && !user.is_premium() {
        debug!(user = %user.username, strategy = strategy.label(), "Premium strategy refused");
        return Err(ActionError::CannotApply { strategy });
    }

    let picked = match strategy {
        Strategy::Standard => standard(catalog, user),
        Strategy::BestUnseen => best_unseen(catalog, user),
        Strategy::Popular => popular(catalog, user),
        Strategy::Favorite => most_favorited(catalog, user),
        Strategy::Search(genre) => return search(catalog, user, genre),
    };

    match picked {
        Some(video) => Ok(Success::Recommended {
            strategy,
            title: video.title.clone(),
        }),
        None => Err(ActionError::CannotApply { strategy }),
    }
}

fn unseen<'a>(catalog: &'a Catalog, user: &'a User) -> impl Iterator<Item = &'a Video> + 'a {
    catalog
        .videos
        .iter()
        .filter(move |video| !user.has_viewed(&video.title))
}

/// First unseen video in catalog order
pub fn standard<'a>(catalog: &'a Catalog, user: &User) -> Option<&'a Video> {
    catalog
        .videos
        .iter()
        .find(|video| !user.has_viewed(&video.title))
}

/// Highest-rated unseen video; the earliest one wins a tie
pub fn best_unseen<'a>(catalog: &'a Catalog, user: &'a User) -> Option<&'a Video> {
    let mut best: Option<&Video> = None;
    for video in unseen(catalog, user) {
        match best {
            Some(current) if video.average_rating() <= current.average_rating() => {}
            _ => best = Some(video),
        }
    }
    best
}

/// First unseen video of the most viewed genre that still has one
pub fn popular<'a>(catalog: &'a Catalog, user: &'a User) -> Option<&'a Video> {
    catalog
        .genres
        .ranked_by_views()
        .into_iter()
        .find_map(|genre| unseen(catalog, user).find(|video| video.genres.contains(&genre)))
}

/// Most favorited unseen video; it must be favorited at least once and
/// the earliest one wins a tie
pub fn most_favorited<'a>(catalog: &'a Catalog, user: &'a User) -> Option<&'a Video> {
    let mut best: Option<&Video> = None;
    for video in unseen(catalog, user).filter(|video| video.favorites > 0) {
        match best {
            Some(current) if video.favorites <= current.favorites => {}
            _ => best = Some(video),
        }
    }
    best
}

/// Every unseen video of `genre`, titles in alphabetical order.
/// An unknown genre (`None`) finds nothing.
fn search(catalog: &Catalog, user: &User, genre: Option<Genre>) -> Response {
    let mut titles: Vec<String> = unseen(catalog, user)
        .filter(|video| genre.is_some_and(|genre| video.genres.contains(&genre)))
        .map(|video| video.title.clone())
        .collect();

    if titles.is_empty() {
        return Err(ActionError::EmptySearchResult { genre });
    }
    titles.sort();
    Ok(Success::SearchResult(titles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{GenreCounters, Tier};

    fn recommend(catalog: &Catalog, user: &str, strategy: Strategy) -> Response {
        execute(
            catalog,
            &Recommendation {
                user: user.to_string(),
                strategy,
            },
        )
    }

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();

        let mut seen = Video::movie("Seen", 2000, [Genre::Drama], Vec::new(), 90);
        seen.add_rating(None, 9.0).unwrap();
        seen.favorites = 5;

        let mut first = Video::movie("First", 2001, [Genre::Comedy], Vec::new(), 90);
        first.add_rating(None, 7.0).unwrap();

        let mut second = Video::movie("Second", 2002, [Genre::Drama], Vec::new(), 90);
        second.add_rating(None, 7.0).unwrap();
        second.favorites = 2;

        let mut third = Video::movie("Third", 2003, [Genre::Drama, Genre::Horror], Vec::new(), 90);
        third.favorites = 2;

        for video in [seen, first, second, third] {
            catalog.videos.insert(video);
        }

        let mut basic = User::new("basic", Tier::Basic);
        basic.viewed.insert("Seen".to_string(), 1);
        let mut premium = User::new("premium", Tier::Premium);
        premium.viewed.insert("Seen".to_string(), 1);
        catalog.users.insert(basic);
        catalog.users.insert(premium);

        catalog.genres = GenreCounters::new();
        catalog.genres.add(Genre::Horror, 4);
        catalog.genres.add(Genre::Drama, 2);
        catalog
    }

    fn title(response: Response) -> String {
        match response {
            Ok(Success::Recommended { title, .. }) => title,
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_standard_skips_viewed() {
        let catalog = catalog();
        assert_eq!(title(recommend(&catalog, "basic", Strategy::Standard)), "First");
    }

    #[test]
    fn test_best_unseen_first_max_wins() {
        let catalog = catalog();
        assert_eq!(title(recommend(&catalog, "basic", Strategy::BestUnseen)), "First");
    }

    #[test]
    fn test_premium_gate() {
        let catalog = catalog();
        for strategy in [Strategy::Popular, Strategy::Favorite, Strategy::Search(Some(Genre::Drama))] {
            assert_eq!(
                recommend(&catalog, "basic", strategy),
                Err(ActionError::CannotApply { strategy })
            );
        }
    }

    #[test]
    fn test_popular_walks_genres_by_views() {
        let catalog = catalog();
        assert_eq!(title(recommend(&catalog, "premium", Strategy::Popular)), "Third");
    }

    #[test]
    fn test_favorite_first_max_wins() {
        let catalog = catalog();
        assert_eq!(title(recommend(&catalog, "premium", Strategy::Favorite)), "Second");
    }

    #[test]
    fn test_search_sorts_titles() {
        let catalog = catalog();
        assert_eq!(
            recommend(&catalog, "premium", Strategy::Search(Some(Genre::Drama))),
            Ok(Success::SearchResult(vec!["Second".to_string(), "Third".to_string()]))
        );
        assert_eq!(
            recommend(&catalog, "premium", Strategy::Search(Some(Genre::Western))),
            Err(ActionError::EmptySearchResult {
                genre: Some(Genre::Western)
            })
        );
        assert_eq!(
            recommend(&catalog, "premium", Strategy::Search(None)),
            Err(ActionError::EmptySearchResult { genre: None })
        );
    }

    #[test]
    fn test_nothing_left_to_recommend() {
        let mut catalog = catalog();
        let user = catalog.users.get_mut("premium").unwrap();
        for title in ["First", "Second", "Third"] {
            user.viewed.insert(title.to_string(), 1);
        }

        for strategy in [
            Strategy::Standard,
            Strategy::BestUnseen,
            Strategy::Popular,
            Strategy::Favorite,
        ] {
            assert_eq!(
                recommend(&catalog, "premium", strategy),
                Err(ActionError::CannotApply { strategy })
            );
        }
    }

    #[test]
    fn test_unknown_user() {
        let catalog = catalog();
        assert_eq!(
            recommend(&catalog, "ghost", Strategy::Standard),
            Err(ActionError::UnknownUser {
                username: "ghost".to_string()
            })
        );
    }
}
