use thiserror::Error;

use crate::domain::entity::EntityId;

/// Setup-time failures.
///
/// The per-tick physics path never produces these: "no collision", "not inertial"
/// and out-of-range terrain reads are represented as data.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("entity {0} is already present in the world")]
    DuplicateEntity(EntityId),

    #[error("entity id {0} was removed from this world and cannot be reused")]
    RetiredEntity(EntityId),

    #[error("entity {id} has the {facet} facet but is missing {required}")]
    MissingFacet {
        id: EntityId,
        facet: &'static str,
        required: &'static str,
    },

    #[error("entity {id} is malformed: {reason}")]
    InvalidEntity { id: EntityId, reason: String },

    #[error("invalid physics config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse physics config: {0}")]
    ConfigJson(#[from] serde_json::Error),
}
