use crate::model::network::NetworkError;
use crate::model::unit::Cost;

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("failure building search computation: {0}")]
    BuildError(String),
    #[error("The search failed due to a road network error. Source: {source}")]
    NetworkFailure {
        #[from]
        source: NetworkError,
    },
    #[error("encountered negative edge cost {0} during search")]
    InvalidEdgeCost(Cost),
    #[error("internal error due to search logic: {0}")]
    InternalError(String),
}
