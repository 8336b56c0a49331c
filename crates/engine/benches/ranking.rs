//! Benchmarks for the ranking pipeline and the recommendation scans
//!
//! Run with: cargo bench --package engine
//!
//! Uses a synthetic catalog so no input file is needed.

use catalog::{Actor, Award, Catalog, Genre, Tier, User, Video};
use criterion::{Criterion, criterion_group, criterion_main};
use engine::action::{ActorCriterion, QueryTarget, VideoClass, VideoCriterion, VideoFilters};
use engine::{Query, Recommendation, SortOrder, Strategy, queries, recommendations};
use std::collections::HashMap;
use std::hint::black_box;

fn synthetic_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    for i in 0..5_000u32 {
        let genre = Genre::ALL[(i as usize) % Genre::ALL.len()];
        let mut video = Video::movie(
            format!("Movie {i:05}"),
            1980 + (i % 40) as i32,
            [genre],
            [format!("Actor {:03}", i % 500)],
            80 + i % 90,
        );
        video.views = i % 37;
        video.favorites = i % 11;
        video.add_rating(None, f64::from(i % 10)).unwrap();
        catalog.videos.insert(video);
    }

    for i in 0..500u32 {
        let filmography = (0..10).map(|k| format!("Movie {:05}", i + k * 500));
        let awards = HashMap::from([(Award::BestPerformance, i % 4 + 1)]);
        catalog
            .actors
            .insert(Actor::new(format!("Actor {i:03}"), "actor", filmography, awards));
    }

    let mut user = User::new("bench", Tier::Premium);
    for i in 0..2_500u32 {
        user.viewed.insert(format!("Movie {i:05}"), 1);
    }
    catalog.users.insert(user);

    catalog
}

fn bench_most_viewed_query(c: &mut Criterion) {
    let catalog = synthetic_catalog();
    let query = Query {
        target: QueryTarget::Videos {
            class: VideoClass::Movies,
            criterion: VideoCriterion::MostViewed,
            filters: VideoFilters {
                year: None,
                genres: Some(vec![Genre::Drama, Genre::Comedy]),
            },
        },
        order: SortOrder::Descending,
        limit: Some(10),
    };

    c.bench_function("query_most_viewed", |b| {
        b.iter(|| black_box(queries::execute(black_box(&catalog), black_box(&query))))
    });
}

fn bench_actor_average_query(c: &mut Criterion) {
    let catalog = synthetic_catalog();
    let query = Query {
        target: QueryTarget::Actors(ActorCriterion::Average),
        order: SortOrder::Descending,
        limit: None,
    };

    c.bench_function("query_actor_average", |b| {
        b.iter(|| black_box(queries::execute(black_box(&catalog), black_box(&query))))
    });
}

fn bench_recommendations(c: &mut Criterion) {
    let catalog = synthetic_catalog();

    for strategy in [Strategy::BestUnseen, Strategy::Popular, Strategy::Search(Some(Genre::Drama))] {
        let recommendation = Recommendation {
            user: "bench".to_string(),
            strategy,
        };
        c.bench_function(&format!("recommend_{}", strategy.label()), |b| {
            b.iter(|| black_box(recommendations::execute(&catalog, black_box(&recommendation))))
        });
    }
}

criterion_group!(
    benches,
    bench_most_viewed_query,
    bench_actor_average_query,
    bench_recommendations
);
criterion_main!(benches);
