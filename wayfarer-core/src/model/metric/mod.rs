mod as_the_crow_flies;
mod landmark_metric;
mod metric;

pub use as_the_crow_flies::AsTheCrowFlies;
pub use landmark_metric::LandmarkMetric;
pub use metric::Metric;
