use serde::Deserialize;

use crate::country::iso3_for_source_code;
use crate::marker::{ColorTag, Marker, MarkerId};

/// One record of a resolved search result page, as the feed delivers it.
///
/// Every field is optional at this boundary; nothing optional survives into
/// [`Marker`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub lat: Option<f64>,
    /// The feed is inconsistent about the longitude key.
    #[serde(alias = "lon")]
    pub lng: Option<f64>,
    pub country_code: Option<String>,
    /// Human-readable location name, when the feed has one.
    pub country: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
}

/// Filters raw records down to plottable markers.
///
/// Records missing either coordinate are dropped silently. The color tag
/// alternates by the record's position in the *raw* page, so a page that
/// loses records to filtering keeps the same tags for the survivors.
pub fn ingest(records: &[RawRecord]) -> Vec<Marker> {
    let mut markers = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let (Some(lat_deg), Some(lng_deg)) = (record.lat, record.lng) else {
            continue;
        };

        let country_code = record.country_code.clone().unwrap_or_default();
        let iso3 = iso3_for_source_code(&country_code).to_string();

        markers.push(Marker {
            id: MarkerId(markers.len() as u32),
            title: record.title.clone().unwrap_or_default(),
            lat_deg,
            lng_deg,
            country_code,
            iso3,
            color: ColorTag::from_index(index),
            url: record.url.clone(),
            summary: record.summary.clone(),
            location_label: record
                .country
                .clone()
                .unwrap_or_else(|| "Unknown Location".to_string()),
        });
    }
    markers
}

/// Parses a JSON result page and ingests it.
pub fn ingest_json(json: &str) -> Result<Vec<Marker>, serde_json::Error> {
    let records: Vec<RawRecord> = serde_json::from_str(json)?;
    Ok(ingest(&records))
}

#[cfg(test)]
mod tests {
    use super::{RawRecord, ingest, ingest_json};
    use crate::country::UNMAPPED_ISO3;
    use crate::marker::{ColorTag, MarkerId};
    use pretty_assertions::assert_eq;

    fn record(lat: Option<f64>, lng: Option<f64>) -> RawRecord {
        RawRecord {
            lat,
            lng,
            ..RawRecord::default()
        }
    }

    #[test]
    fn drops_records_missing_either_coordinate() {
        let records = vec![
            record(Some(10.0), Some(20.0)),
            record(Some(10.0), None),
            record(None, Some(20.0)),
            record(None, None),
        ];
        let markers = ingest(&records);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].id, MarkerId(0));
    }

    #[test]
    fn color_parity_follows_raw_page_order() {
        let records = vec![
            record(None, None),          // index 0, dropped
            record(Some(1.0), Some(1.0)), // index 1 -> Pink
            record(Some(2.0), Some(2.0)), // index 2 -> Blue
        ];
        let markers = ingest(&records);
        assert_eq!(markers[0].color, ColorTag::Pink);
        assert_eq!(markers[1].color, ColorTag::Blue);
    }

    #[test]
    fn normalizes_country_and_labels() {
        let records = vec![RawRecord {
            lat: Some(52.5),
            lng: Some(13.4),
            country_code: Some("GM".to_string()),
            country: Some("Germany".to_string()),
            title: Some("headline".to_string()),
            ..RawRecord::default()
        }];
        let markers = ingest(&records);
        assert_eq!(markers[0].iso3, "DEU");
        assert_eq!(markers[0].location_label, "Germany");

        let unmapped = ingest(&[record(Some(0.0), Some(0.0))]);
        assert_eq!(unmapped[0].iso3, UNMAPPED_ISO3);
        assert_eq!(unmapped[0].location_label, "Unknown Location");
    }

    #[test]
    fn accepts_lon_alias_for_longitude() {
        let markers = ingest_json(
            r#"[
                {"lat": 35.7, "lon": 139.7, "country_code": "JA", "title": "tokyo"},
                {"lat": 48.9, "lng": 2.35, "country_code": "FR", "title": "paris"}
            ]"#,
        )
        .unwrap();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].lng_deg, 139.7);
        assert_eq!(markers[1].lng_deg, 2.35);
    }

    #[test]
    fn malformed_page_is_an_error_not_a_panic() {
        assert!(ingest_json("not json").is_err());
    }
}
