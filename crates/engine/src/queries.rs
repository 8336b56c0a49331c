//! Query handlers: ranked lists of actors, videos or users.
//!
//! Every query builds a `RankingPipeline` with its eligibility filters
//! and ranks by a single numeric key. Queries never mutate the catalog.

use crate::action::{ActorCriterion, Query, QueryTarget, VideoClass, VideoCriterion, VideoFilters};
use crate::filter_pipeline::{RankingPipeline, names};
use crate::filters::{
    ActiveRaterFilter, AwardsFilter, DescriptionFilter, FavoritedFilter, GenreFilter, KindFilter,
    RatedActorFilter, RatedFilter, ViewedFilter, YearFilter,
};
use crate::outcome::{Response, Success};
use crate::traits::ScoredActor;
use catalog::{Actor, Catalog, User, Video};
use rayon::prelude::*;
use tracing::debug;

pub fn execute(catalog: &Catalog, query: &Query) -> Response {
    let names = match &query.target {
        QueryTarget::Actors(criterion) => rank_actors(catalog, criterion, query),
        QueryTarget::Videos {
            class,
            criterion,
            filters,
        } => rank_videos(catalog, *class, *criterion, filters, query),
        QueryTarget::Users => rank_users(catalog, query),
    };
    debug!(results = names.len(), "Query ranked");
    Ok(Success::QueryResult(names))
}

fn rank_actors(catalog: &Catalog, criterion: &ActorCriterion, query: &Query) -> Vec<String> {
    match criterion {
        ActorCriterion::Average => {
            // Averages follow the current ratings, so they are recomputed per query
            let actors: Vec<&Actor> = catalog.actors.iter().collect();
            let scored: Vec<ScoredActor<'_>> = actors
                .par_iter()
                .map(|&actor| ScoredActor {
                    actor,
                    average: catalog.actor_average(actor),
                })
                .collect();

            let ranked = RankingPipeline::new()
                .add_filter(RatedActorFilter)
                .order(query.order)
                .limit(query.limit)
                .rank(&scored, |scored: &ScoredActor<'_>| scored.average);
            names(&ranked)
        }
        ActorCriterion::Awards(awards) => {
            let ranked = RankingPipeline::new()
                .add_filter(AwardsFilter::new(awards.clone()))
                .order(query.order)
                .limit(query.limit)
                .rank(catalog.actors.iter(), |actor: &Actor| actor.total_awards as f64);
            names(&ranked)
        }
        ActorCriterion::Description(words) => {
            let ranked = RankingPipeline::new()
                .add_filter(DescriptionFilter::new(words.clone()))
                .order(query.order)
                .limit(query.limit)
                .rank(catalog.actors.iter(), |_: &Actor| 0.0);
            names(&ranked)
        }
    }
}

fn rank_videos(
    catalog: &Catalog,
    class: VideoClass,
    criterion: VideoCriterion,
    filters: &VideoFilters,
    query: &Query,
) -> Vec<String> {
    let mut pipeline = RankingPipeline::new().add_filter(KindFilter::new(class));
    if let Some(year) = filters.year {
        pipeline = pipeline.add_filter(YearFilter::new(year));
    }
    if let Some(genres) = &filters.genres {
        pipeline = pipeline.add_filter(GenreFilter::new(genres.clone()));
    }

    let key: fn(&Video) -> f64 = match criterion {
        VideoCriterion::Ratings => {
            pipeline = pipeline.add_filter(RatedFilter);
            by_rating
        }
        VideoCriterion::Favorites => {
            pipeline = pipeline.add_filter(FavoritedFilter);
            by_favorites
        }
        VideoCriterion::MostViewed => {
            pipeline = pipeline.add_filter(ViewedFilter);
            by_views
        }
        VideoCriterion::Longest => by_duration,
    };

    let ranked = pipeline
        .order(query.order)
        .limit(query.limit)
        .rank(catalog.videos.iter(), key);
    names(&ranked)
}

fn by_rating(video: &Video) -> f64 {
    video.average_rating()
}

fn by_favorites(video: &Video) -> f64 {
    video.favorites as f64
}

fn by_views(video: &Video) -> f64 {
    video.views as f64
}

fn by_duration(video: &Video) -> f64 {
    video.duration as f64
}

fn rank_users(catalog: &Catalog, query: &Query) -> Vec<String> {
    let ranked = RankingPipeline::new()
        .add_filter(ActiveRaterFilter)
        .order(query.order)
        .limit(query.limit)
        .rank(catalog.users.iter(), |user: &User| user.rating_count as f64);
    names(&ranked)
}
