//! Placeholder map picking.
//!
//! The map mode only shows an embedded map of Kigali. Confirming a location
//! does not geocode anything; it fills the field with a fixed label.

use crate::LocationField;

const EMBED_BASE_URL: &str = "https://www.openstreetmap.org/export/embed.html";
/// Kigali bounding box: min lon, min lat, max lon, max lat
const KIGALI_BBOX: &str = "29.7500,-2.6167,30.1344,-1.9428";
const PICKUP_MARKER: &str = "-1.9567,30.0964";

pub struct MapSelection;

impl MapSelection {
    /// Value stored in the draft when a map location is confirmed
    pub fn placeholder_label(location: LocationField) -> String {
        format!("Selected location from map ({})", location.name())
    }

    /// OpenStreetMap embed for the location picker iframe
    pub fn embed_url(location: LocationField) -> String {
        let marker = match location {
            LocationField::Pickup => PICKUP_MARKER,
            LocationField::Destination => "",
        };
        format!("{}?bbox={}&layer=mapnik&marker={}", EMBED_BASE_URL, KIGALI_BBOX, marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_labels() {
        assert_eq!(
            MapSelection::placeholder_label(LocationField::Pickup),
            "Selected location from map (pickup)"
        );
        assert_eq!(
            MapSelection::placeholder_label(LocationField::Destination),
            "Selected location from map (destination)"
        );
    }

    #[test]
    fn test_embed_urls() {
        assert_eq!(
            MapSelection::embed_url(LocationField::Pickup),
            "https://www.openstreetmap.org/export/embed.html?bbox=29.7500,-2.6167,30.1344,-1.9428&layer=mapnik&marker=-1.9567,30.0964"
        );
        assert!(MapSelection::embed_url(LocationField::Destination).ends_with("&marker="));
    }
}
