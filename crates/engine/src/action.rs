//! Typed actions.
//!
//! An `ActionInput` is decoded once into an `Action`: a two-level enum
//! (action kind, then sub-kind) carrying exactly the fields its handler
//! needs. Combinations the engine doesn't know decode to
//! `ActionKind::Unsupported` instead of failing.

use catalog::parser::parse_awards;
use catalog::{ActionInput, Award, CatalogError, Genre, Result, Video};
use std::str::FromStr;
use tracing::warn;

// Positions inside an action's filter lists
const YEAR_FILTER: usize = 0;
const GENRE_FILTER: usize = 1;
const WORDS_FILTER: usize = 2;
const AWARDS_FILTER: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(CatalogError::InvalidValue {
                field: "sort_type".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Which half of the video store a video query looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoClass {
    Movies,
    Shows,
}

impl VideoClass {
    pub fn includes(self, video: &Video) -> bool {
        match self {
            VideoClass::Movies => !video.is_show(),
            VideoClass::Shows => video.is_show(),
        }
    }
}

/// Optional year and genre restrictions of a video query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoFilters {
    pub year: Option<i32>,
    /// `None` means no genre restriction. Names outside the known tag set
    /// are dropped, so `Some` of an empty list matches no video.
    pub genres: Option<Vec<Genre>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Favorite {
        user: String,
        title: String,
    },
    View {
        user: String,
        title: String,
    },
    Rate {
        user: String,
        title: String,
        grade: f64,
        /// `None` rates a movie, `Some(n)` rates season `n` of a show
        season: Option<u32>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActorCriterion {
    Average,
    /// Actor must hold every listed award
    Awards(Vec<Award>),
    /// Description must contain every listed (lowercase) word
    Description(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoCriterion {
    Ratings,
    Favorites,
    Longest,
    MostViewed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryTarget {
    Actors(ActorCriterion),
    Videos {
        class: VideoClass,
        criterion: VideoCriterion,
        filters: VideoFilters,
    },
    /// Users by number of ratings given
    Users,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub target: QueryTarget,
    pub order: SortOrder,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Standard,
    BestUnseen,
    Popular,
    Favorite,
    /// `None` for a genre name outside the known tag set
    Search(Option<Genre>),
}

impl Strategy {
    /// Prefix used in rendered recommendation messages
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Standard => "Standard",
            Strategy::BestUnseen => "BestRatedUnseen",
            Strategy::Popular => "Popular",
            Strategy::Favorite => "Favorite",
            Strategy::Search(_) => "Search",
        }
    }

    pub fn requires_premium(self) -> bool {
        !matches!(self, Strategy::Standard | Strategy::BestUnseen)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub user: String,
    pub strategy: Strategy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    Command(Command),
    Query(Query),
    Recommendation(Recommendation),
    Unsupported {
        action_type: String,
        sub_kind: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub id: u32,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(id: u32, kind: ActionKind) -> Self {
        Self { id, kind }
    }
}

impl TryFrom<&ActionInput> for Action {
    type Error = CatalogError;

    fn try_from(input: &ActionInput) -> Result<Self> {
        let kind = match input.action_type.as_str() {
            "command" => decode_command(input)?.map(ActionKind::Command),
            "query" => decode_query(input)?.map(ActionKind::Query),
            "recommendation" => decode_recommendation(input)?.map(ActionKind::Recommendation),
            _ => None,
        };

        let kind = kind.unwrap_or_else(|| ActionKind::Unsupported {
            action_type: input.action_type.clone(),
            sub_kind: input
                .kind
                .clone()
                .or_else(|| input.criteria.clone())
                .unwrap_or_default(),
        });
        Ok(Action::new(input.action_id, kind))
    }
}

/// Decode every action, failing on the first malformed one
pub fn decode_actions(inputs: &[ActionInput]) -> Result<Vec<Action>> {
    inputs.iter().map(Action::try_from).collect()
}

fn required<'a>(field: &str, value: &'a Option<String>) -> Result<&'a str> {
    value.as_deref().ok_or_else(|| CatalogError::InvalidValue {
        field: field.to_string(),
        value: "<missing>".to_string(),
    })
}

fn decode_command(input: &ActionInput) -> Result<Option<Command>> {
    let Some(kind) = input.kind.as_deref() else {
        return Ok(None);
    };
    if !matches!(kind, "favorite" | "view" | "rating") {
        return Ok(None);
    }

    let user = required("user", &input.username)?.to_string();
    let title = required("title", &input.title)?.to_string();

    let command = match kind {
        "favorite" => Command::Favorite { user, title },
        "view" => Command::View { user, title },
        _ => Command::Rate {
            user,
            title,
            grade: input.grade.ok_or_else(|| CatalogError::InvalidValue {
                field: "grade".to_string(),
                value: "<missing>".to_string(),
            })?,
            season: input.season.filter(|&season| season != 0),
        },
    };
    Ok(Some(command))
}

fn decode_query(input: &ActionInput) -> Result<Option<Query>> {
    let Some(criteria) = input.criteria.as_deref() else {
        return Ok(None);
    };

    let target = match criteria {
        "average" => QueryTarget::Actors(ActorCriterion::Average),
        "awards" => QueryTarget::Actors(ActorCriterion::Awards(parse_awards(
            &filter_tokens(input, AWARDS_FILTER),
        )?)),
        "filter_description" => QueryTarget::Actors(ActorCriterion::Description(
            filter_tokens(input, WORDS_FILTER)
                .iter()
                .map(|word| word.to_lowercase())
                .collect(),
        )),
        "num_ratings" => QueryTarget::Users,
        "ratings" | "favorite" | "longest" | "most_viewed" => {
            let class = match input.object_type.as_deref() {
                Some("movies") => VideoClass::Movies,
                Some("shows") => VideoClass::Shows,
                _ => return Ok(None),
            };
            let criterion = match criteria {
                "ratings" => VideoCriterion::Ratings,
                "favorite" => VideoCriterion::Favorites,
                "longest" => VideoCriterion::Longest,
                _ => VideoCriterion::MostViewed,
            };
            QueryTarget::Videos {
                class,
                criterion,
                filters: decode_video_filters(input)?,
            }
        }
        _ => return Ok(None),
    };

    let order = match input.sort_type.as_deref() {
        Some(sort) => sort.parse::<SortOrder>()?,
        None => SortOrder::Ascending,
    };

    Ok(Some(Query {
        target,
        order,
        limit: input.number,
    }))
}

fn decode_video_filters(input: &ActionInput) -> Result<VideoFilters> {
    let year = match filter_tokens(input, YEAR_FILTER).first() {
        Some(token) => Some(token.trim().parse::<i32>().map_err(|_| {
            CatalogError::InvalidValue {
                field: "year".to_string(),
                value: token.to_string(),
            }
        })?),
        None => None,
    };

    let names = filter_tokens(input, GENRE_FILTER);
    let genres = if names.is_empty() {
        None
    } else {
        Some(names.iter().filter_map(|name| known_genre(name)).collect())
    };

    Ok(VideoFilters { year, genres })
}

/// Genre names in actions are not validated; an unknown one matches nothing
fn known_genre(name: &str) -> Option<Genre> {
    match name.parse::<Genre>() {
        Ok(genre) => Some(genre),
        Err(_) => {
            warn!(genre = name, "Unknown genre in action");
            None
        }
    }
}

/// Non-null tokens of one positional filter list
fn filter_tokens(input: &ActionInput, position: usize) -> Vec<&str> {
    input
        .filters
        .as_ref()
        .and_then(|lists| lists.get(position))
        .and_then(|list| list.as_ref())
        .map(|list| list.iter().flatten().map(String::as_str).collect())
        .unwrap_or_default()
}

fn decode_recommendation(input: &ActionInput) -> Result<Option<Recommendation>> {
    let strategy = match input.kind.as_deref() {
        Some("standard") => Strategy::Standard,
        Some("best_unseen") => Strategy::BestUnseen,
        Some("popular") => Strategy::Popular,
        Some("favorite") => Strategy::Favorite,
        Some("search") => Strategy::Search(known_genre(required("genre", &input.genre)?)),
        _ => return Ok(None),
    };

    Ok(Some(Recommendation {
        user: required("user", &input.username)?.to_string(),
        strategy,
    }))
}
