//! Parsing of the fixed vocabularies used by input documents.
//!
//! - genres: display names, matched case-insensitively ("science fiction")
//! - awards: upper snake case ("BEST_DIRECTOR")
//! - tiers: "BASIC" / "PREMIUM"

use crate::error::{CatalogError, Result};
use crate::types::{Award, Genre, Tier};
use std::str::FromStr;

impl FromStr for Genre {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "action" => Ok(Genre::Action),
            "adventure" => Ok(Genre::Adventure),
            "drama" => Ok(Genre::Drama),
            "comedy" => Ok(Genre::Comedy),
            "crime" => Ok(Genre::Crime),
            "romance" => Ok(Genre::Romance),
            "war" => Ok(Genre::War),
            "history" => Ok(Genre::History),
            "thriller" => Ok(Genre::Thriller),
            "mystery" => Ok(Genre::Mystery),
            "family" => Ok(Genre::Family),
            "horror" => Ok(Genre::Horror),
            "fantasy" => Ok(Genre::Fantasy),
            "science fiction" => Ok(Genre::ScienceFiction),
            "action & adventure" => Ok(Genre::ActionAdventure),
            "sci-fi & fantasy" => Ok(Genre::SciFiFantasy),
            "animation" => Ok(Genre::Animation),
            "kids" => Ok(Genre::Kids),
            "western" => Ok(Genre::Western),
            "tv movie" => Ok(Genre::TvMovie),
            _ => Err(CatalogError::invalid("genre", s)),
        }
    }
}

impl FromStr for Award {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "BEST_SCREENPLAY" => Ok(Award::BestScreenplay),
            "BEST_SUPPORTING_ACTOR" => Ok(Award::BestSupportingActor),
            "BEST_DIRECTOR" => Ok(Award::BestDirector),
            "BEST_PERFORMANCE" => Ok(Award::BestPerformance),
            "PEOPLE_CHOICE_AWARD" => Ok(Award::PeopleChoiceAward),
            _ => Err(CatalogError::invalid("award", s)),
        }
    }
}

impl FromStr for Tier {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "BASIC" => Ok(Tier::Basic),
            "PREMIUM" => Ok(Tier::Premium),
            _ => Err(CatalogError::invalid("subscription", s)),
        }
    }
}

/// Parse a list of genre names
///
/// Example: ["Drama", "crime"] -> vec![Genre::Drama, Genre::Crime]
pub fn parse_genres<S: AsRef<str>>(names: &[S]) -> Result<Vec<Genre>> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}

/// Parse a list of award names
pub fn parse_awards<S: AsRef<str>>(names: &[S]) -> Result<Vec<Award>> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_genre_ignores_case() {
        assert_eq!("Drama".parse::<Genre>().unwrap(), Genre::Drama);
        assert_eq!("SCIENCE FICTION".parse::<Genre>().unwrap(), Genre::ScienceFiction);
        assert_eq!("Sci-Fi & Fantasy".parse::<Genre>().unwrap(), Genre::SciFiFantasy);
        assert!("Telenovela".parse::<Genre>().is_err());
    }

    #[test]
    fn test_every_genre_parses_from_its_display_name() {
        for genre in Genre::ALL {
            assert_eq!(genre.as_str().parse::<Genre>().unwrap(), genre);
        }
    }

    #[test]
    fn test_parse_award_and_tier() {
        assert_eq!("BEST_DIRECTOR".parse::<Award>().unwrap(), Award::BestDirector);
        assert!("best_director".parse::<Award>().is_err());
        assert_eq!("PREMIUM".parse::<Tier>().unwrap(), Tier::Premium);
        assert!(matches!(
            "GOLD".parse::<Tier>(),
            Err(CatalogError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_lists() {
        let genres = parse_genres(&["Action", "Kids"]).unwrap();
        assert_eq!(genres, vec![Genre::Action, Genre::Kids]);
        assert!(parse_awards(&["BEST_DIRECTOR", "NOPE"]).is_err());
    }
}
