//! Action-processing engine for the streaming catalog simulation.
//!
//! This crate provides:
//! - Typed actions decoded from raw input records
//! - Filter trait and implementations for ranking eligibility
//! - RankingPipeline for composing filters with sort, reverse and truncate
//! - Command, query and recommendation handlers behind one dispatcher
//! - Simulation, which replays a whole batch and renders one output per action
//!
//! ## Architecture
//! Actions run strictly in input order:
//! 1. Commands mutate the catalog (favorite, view, rate)
//! 2. Queries rank actors, videos or users through the pipeline
//! 3. Recommendations scan unseen videos in catalog order
//!
//! ## Example Usage
//! ```ignore
//! use engine::Simulation;
//!
//! let mut simulation = Simulation::load_from_file(Path::new("input.json"))?;
//! for output in simulation.run() {
//!     println!("{}: {}", output.id, output.message);
//! }
//! ```

pub mod action;
pub mod commands;
pub mod dispatcher;
pub mod filter_pipeline;
pub mod filters;
pub mod outcome;
pub mod queries;
pub mod recommendations;
pub mod simulation;
pub mod traits;

// Re-export main types
pub use action::{Action, ActionKind, Command, Query, Recommendation, SortOrder, Strategy, decode_actions};
pub use dispatcher::dispatch;
pub use filter_pipeline::RankingPipeline;
pub use outcome::{ActionError, ActionOutput, Response, Success};
pub use simulation::Simulation;
pub use traits::{Filter, Ranked, ScoredActor};
