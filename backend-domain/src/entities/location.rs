// Location entity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Location {
    /// Partial-field merge; absent patch fields leave the record untouched.
    pub fn apply(&mut self, patch: LocationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(lat) = patch.lat {
            self.lat = lat;
        }
        if let Some(lng) = patch.lng {
            self.lng = lng;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }
}

/// Creation payload; the identifier is allocated server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationDraft {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Update payload; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Both components finite and inside geographic range.
pub fn coordinates_in_range(lat: f64, lng: f64) -> bool {
    lat.is_finite() && lng.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_in_range_accepts_valid_pair() {
        assert!(coordinates_in_range(35.3192, 139.5467));
    }

    #[test]
    fn coordinates_in_range_rejects_out_of_range_and_nan() {
        assert!(!coordinates_in_range(91.0, 139.0));
        assert!(!coordinates_in_range(35.0, -181.0));
        assert!(!coordinates_in_range(f64::NAN, 139.0));
    }
}
