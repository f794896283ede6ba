//! Where and with what a photo was taken.

use serde::{Deserialize, Serialize};

use crate::decoder::lenient;

/// A latitude/longitude pair in decimal degrees.
///
/// Wire shape is `{"latitude": f64, "longitude": f64}` in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
    /// Absent when the API sends null coordinates.
    #[serde(default, deserialize_with = "lenient")]
    pub position: Option<Coordinate>,
}

/// Camera settings recorded in the photo's EXIF block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exif {
    #[serde(default, deserialize_with = "lenient")]
    pub make: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub exposure_time: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub aperture: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub focal_length: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub iso: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_roundtrip() {
        let original = Coordinate::new(60.192_059, 24.945_831);
        let json = serde_json::to_string(&original).unwrap();
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert!((back.latitude - original.latitude).abs() < 1e-9);
        assert!((back.longitude - original.longitude).abs() < 1e-9);
    }

    #[test]
    fn coordinate_wire_shape() {
        let value = serde_json::to_value(Coordinate::new(1.5, -2.25)).unwrap();
        assert_eq!(value, serde_json::json!({"latitude": 1.5, "longitude": -2.25}));
    }

    #[test]
    fn null_position_is_absent() {
        let location: Location = serde_json::from_str(
            r#"{"name":"Montreal","city":"Montreal","country":"Canada","position":{"latitude":null,"longitude":null}}"#,
        )
        .unwrap();
        assert_eq!(location.city.as_deref(), Some("Montreal"));
        assert!(location.position.is_none());
    }

    #[test]
    fn exif_fields_are_all_optional() {
        let exif: Exif = serde_json::from_str(r#"{"make":"Canon","iso":null}"#).unwrap();
        assert_eq!(exif.make.as_deref(), Some("Canon"));
        assert!(exif.iso.is_none());
        assert!(exif.model.is_none());
    }
}
