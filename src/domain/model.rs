use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Public network address of the machine, in textual IPv4/IPv6 form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkAddress(String);

impl NetworkAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Validate for NetworkAddress {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("network address", &self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Validate for Coordinates {
    fn validate(&self) -> Result<()> {
        validate_range("latitude", self.latitude, -90.0, 90.0)?;
        validate_range("longitude", self.longitude, -180.0, 180.0)
    }
}

/// A predicted overhead pass: rise time as epoch seconds plus visible duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassWindow {
    pub risetime: i64,
    pub duration: u64,
}

impl PassWindow {
    pub fn rise_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.risetime, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FlyoverError;

    #[test]
    fn test_network_address_validation() {
        assert!(NetworkAddress::new("162.245.144.188").validate().is_ok());
        assert!(NetworkAddress::new("2001:db8::1").validate().is_ok());
        assert!(matches!(
            NetworkAddress::new("").validate(),
            Err(FlyoverError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_coordinates_validation() {
        let nyc = Coordinates {
            latitude: 40.7,
            longitude: -74.0,
        };
        assert!(nyc.validate().is_ok());

        let bad_lat = Coordinates {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(bad_lat.validate().is_err());

        let bad_lon = Coordinates {
            latitude: 0.0,
            longitude: -180.5,
        };
        assert!(bad_lon.validate().is_err());

        let nan = Coordinates {
            latitude: f64::NAN,
            longitude: 0.0,
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_pass_window_deserializes_from_service_payload() {
        let passes: Vec<PassWindow> = serde_json::from_value(serde_json::json!([
            {"risetime": 1700000000, "duration": 600},
            {"risetime": 1700005800, "duration": 420}
        ]))
        .unwrap();

        assert_eq!(passes.len(), 2);
        assert_eq!(passes[0].risetime, 1_700_000_000);
        assert_eq!(passes[1].duration, 420);
    }

    #[test]
    fn test_rise_time() {
        let pass = PassWindow {
            risetime: 1_700_000_000,
            duration: 600,
        };
        assert_eq!(
            pass.rise_time().unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );
    }
}
