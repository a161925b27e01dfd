use wayfarer_core::algorithm::search::SearchError;
use wayfarer_core::model::network::NetworkError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failure building wayfarer app: {0}")]
    BuildFailure(String),
    #[error(transparent)]
    ConfigFailure(#[from] config::ConfigError),
    #[error(transparent)]
    SearchFailure(#[from] SearchError),
    #[error("While interacting with the road network outside of the context of search, an error occurred. Source: {source}")]
    NetworkFailure {
        #[from]
        source: NetworkError,
    },
    #[error("failure reading metadata from CSV: {source}")]
    CsvFailure {
        #[from]
        source: csv::Error,
    },
    #[error("i/o failure: {source}")]
    IoFailure {
        #[from]
        source: std::io::Error,
    },
    #[error("internal error: {0}")]
    InternalError(String),
}
