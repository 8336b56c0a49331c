//! Routes a typed action to its handler.

use crate::action::{Action, ActionKind};
use crate::outcome::{ActionError, Response};
use crate::{commands, queries, recommendations};
use catalog::Catalog;
use tracing::{debug, warn};

/// Run one action against the catalog. Never panics; every outcome is a value.
pub fn dispatch(catalog: &mut Catalog, action: &Action) -> Response {
    debug!(id = action.id, "Dispatching action");
    let response = match &action.kind {
        ActionKind::Command(command) => commands::execute(catalog, command),
        ActionKind::Query(query) => queries::execute(catalog, query),
        ActionKind::Recommendation(recommendation) => {
            recommendations::execute(catalog, recommendation)
        }
        ActionKind::Unsupported {
            action_type,
            sub_kind,
        } => {
            warn!(id = action.id, %action_type, %sub_kind, "Unsupported action");
            Err(ActionError::Unsupported {
                action_type: action_type.clone(),
                sub_kind: sub_kind.clone(),
            })
        }
    };

    if let Err(error) = &response {
        debug!(id = action.id, %error, "Action rejected");
    }
    response
}
