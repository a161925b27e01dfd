use serde_repr::{Deserialize_repr, Serialize_repr};

/// how a route segment is traveled, carried on the wire as an integer
/// code. routes are currently planned for cars only; the other modes
/// exist so that clients can already request them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum TransportationMode {
    Car = 0,
    Bike = 1,
    Foot = 2,
    Tram = 3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_are_integer_codes() {
        let codes: Vec<TransportationMode> = serde_json::from_str("[0, 2, 3]").unwrap();
        assert_eq!(
            codes,
            vec![
                TransportationMode::Car,
                TransportationMode::Foot,
                TransportationMode::Tram
            ]
        );
        assert_eq!(serde_json::to_string(&TransportationMode::Bike).unwrap(), "1");
    }
}
