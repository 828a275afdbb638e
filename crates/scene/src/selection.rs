use crate::marker::{Marker, MarkerId};

/// Payload handed to the UI panel layer when the user picks a country
/// polygon or a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub iso3: String,
    pub display_name: String,
    /// Present when the selection originated from a marker click.
    pub marker: Option<MarkerId>,
}

pub fn select_country(iso3: &str, admin_name: &str) -> Selection {
    Selection {
        iso3: iso3.to_string(),
        display_name: admin_name.to_string(),
        marker: None,
    }
}

/// Builds the selection for a marker click.
///
/// `admin_name` is the polygon dataset's name for the marker's country, when
/// one resolved; otherwise the marker's own location label stands in.
pub fn select_marker(marker: &Marker, admin_name: Option<&str>) -> Selection {
    Selection {
        iso3: marker.iso3.clone(),
        display_name: admin_name
            .unwrap_or(marker.location_label.as_str())
            .to_string(),
        marker: Some(marker.id),
    }
}

#[cfg(test)]
mod tests {
    use super::{select_country, select_marker};
    use crate::ingest::{RawRecord, ingest};

    #[test]
    fn country_selection_carries_no_marker() {
        let s = select_country("DEU", "Germany");
        assert_eq!(s.iso3, "DEU");
        assert_eq!(s.display_name, "Germany");
        assert!(s.marker.is_none());
    }

    #[test]
    fn marker_selection_prefers_admin_name() {
        let markers = ingest(&[RawRecord {
            lat: Some(52.5),
            lng: Some(13.4),
            country_code: Some("GM".to_string()),
            country: Some("Germany (feed)".to_string()),
            ..RawRecord::default()
        }]);

        let with_admin = select_marker(&markers[0], Some("Germany"));
        assert_eq!(with_admin.display_name, "Germany");
        assert_eq!(with_admin.marker, Some(markers[0].id));

        let without = select_marker(&markers[0], None);
        assert_eq!(without.display_name, "Germany (feed)");
    }
}
