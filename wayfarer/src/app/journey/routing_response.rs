use crate::app::journey::TransportationMode;
use serde::{Deserialize, Serialize};

/// answer to one routing query. `time` is the measured milliseconds
/// spent computing the route and assembling the journey. `journeys` is
/// empty when an endpoint could not be resolved or no route exists; the
/// other fields are populated regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingResponse {
    pub time: u64,
    pub from: i64,
    pub to: i64,
    pub journeys: Vec<Journey>,
}

/// one way of traveling from the requested source to the requested
/// destination, as a sequence of route elements. times are epoch
/// milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub dep_time: i64,
    pub arr_time: i64,
    pub route: Vec<RouteElement>,
}

/// a stop or a traveled road segment within a journey. geometry is a
/// sequence of `[lat, lon]` coordinate pairs; a node element carries
/// exactly one pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RouteElement {
    Node {
        name: String,
        geom: Vec<[f32; 2]>,
    },
    Path {
        mode: TransportationMode,
        name: String,
        geom: Vec<[f32; 2]>,
    },
}
