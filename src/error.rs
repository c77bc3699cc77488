use thiserror::Error;

use crate::model::StopId;

/// Errors produced during catalogue ingestion and queries.
///
/// Ingestion errors abort the offending entity; lookup misses are ordinary
/// outcomes the caller renders as "not found".
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("stop not found: {0}")]
    StopNotFound(String),
    #[error("bus not found: {0}")]
    BusNotFound(String),
    #[error("duplicate stop name: {0}")]
    DuplicateStop(String),
    #[error("duplicate bus name: {0}")]
    DuplicateBus(String),
    #[error("bus {0} visits fewer than two stops")]
    DegenerateTrip(String),
    #[error("no road distance between {0} and {1}")]
    MissingDistance(String, String),
    #[error("stop id {0} does not belong to this catalogue")]
    UnresolvedStop(StopId),
    #[error("invalid data: {0}")]
    InvalidData(String),
}
