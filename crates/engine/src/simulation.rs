//! Replays a batch of actions over one catalog.

use crate::action::{Action, decode_actions};
use crate::dispatcher::dispatch;
use crate::outcome::ActionOutput;
use catalog::{Catalog, InputDocument, Result};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// A catalog plus the ordered actions to run against it
pub struct Simulation {
    catalog: Catalog,
    actions: Vec<Action>,
}

impl Simulation {
    pub fn new(catalog: Catalog, actions: Vec<Action>) -> Self {
        Self { catalog, actions }
    }

    /// Build the catalog and decode the actions of an input document
    pub fn from_document(document: InputDocument) -> Result<Self> {
        let (catalog, inputs) = Catalog::from_document(document)?;
        Ok(Self::new(catalog, decode_actions(&inputs)?))
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let (catalog, inputs) = Catalog::load_from_file(path)?;
        Ok(Self::new(catalog, decode_actions(&inputs)?))
    }

    /// Run every action in order, one output per action.
    ///
    /// Each action sees all mutations made by the ones before it.
    pub fn run(&mut self) -> Vec<ActionOutput> {
        let start = Instant::now();
        let outputs: Vec<ActionOutput> = self
            .actions
            .iter()
            .map(|action| ActionOutput::new(action.id, &dispatch(&mut self.catalog, action)))
            .collect();

        info!(
            "Replayed {} actions in {:.2?}",
            outputs.len(),
            start.elapsed()
        );
        outputs
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}
