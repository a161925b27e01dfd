use std::{cmp::Ordering, fmt::Display};

use serde::{Deserialize, Serialize};

/// identifier of the OSM way an edge belongs to. consecutive edges that
/// share a way id form one named road segment when a route is rendered.
#[derive(Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Default)]
pub struct WayId(pub i64);

impl PartialOrd for WayId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WayId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Display for WayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
