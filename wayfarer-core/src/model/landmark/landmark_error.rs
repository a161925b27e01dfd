use crate::algorithm::search::SearchError;

#[derive(thiserror::Error, Debug)]
pub enum LandmarkError {
    #[error("failure running a landmark search: {source}")]
    SearchFailure {
        #[from]
        source: SearchError,
    },
    #[error("{0}")]
    InternalError(String),
}
