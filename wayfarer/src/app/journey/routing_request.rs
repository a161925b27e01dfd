use crate::app::journey::TransportationMode;
use serde::{Deserialize, Serialize};

/// a point-to-point routing query. `from` and `to` are OSM node ids;
/// `dep_time` is the requested departure in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRequest {
    pub dep_time: i64,
    #[serde(default)]
    pub modes: Vec<TransportationMode>,
    pub from: i64,
    pub to: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request() {
        let request: RoutingRequest = serde_json::from_str(
            r#"{"depTime": 1609459200000, "modes": [0, 1], "from": 1001, "to": 1002}"#,
        )
        .unwrap();
        assert_eq!(request.dep_time, 1609459200000);
        assert_eq!(
            request.modes,
            vec![TransportationMode::Car, TransportationMode::Bike]
        );
        assert_eq!(request.from, 1001);
        assert_eq!(request.to, 1002);
    }

    #[test]
    fn test_modes_default_to_empty() {
        let request: RoutingRequest =
            serde_json::from_str(r#"{"depTime": 0, "from": 1, "to": 2}"#).unwrap();
        assert!(request.modes.is_empty());
    }

    #[test]
    fn test_missing_endpoint_is_rejected() {
        let result: Result<RoutingRequest, _> =
            serde_json::from_str(r#"{"depTime": 0, "from": 1}"#);
        assert!(result.is_err());
    }
}
