/// Index into the current [`MarkerStore`] snapshot.
///
/// Ids are only meaningful against the store generation that produced them;
/// a wholesale replacement invalidates all previous ids.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u32);

/// Two-valued display grouping tag, assigned by ingestion-order parity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorTag {
    Blue,
    Pink,
}

impl ColorTag {
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            ColorTag::Blue
        } else {
            ColorTag::Pink
        }
    }
}

/// A geolocated article, validated and normalized at the ingestion boundary.
///
/// Immutable once created. Coordinates are guaranteed present; optional-field
/// ambiguity from the raw feed does not leak past [`crate::ingest`].
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub title: String,
    pub lat_deg: f64,
    pub lng_deg: f64,
    /// Raw source country code (FIPS 10-4 in the GDELT feed).
    pub country_code: String,
    /// Normalized ISO-3166 alpha-3, or the sentinel for unmapped codes.
    pub iso3: String,
    pub color: ColorTag,
    pub url: Option<String>,
    pub summary: Option<String>,
    pub location_label: String,
}

/// Holds the current candidate marker set.
///
/// Replaced wholesale when a new search query resolves; there is no
/// incremental merge.
#[derive(Debug, Default)]
pub struct MarkerStore {
    markers: Vec<Marker>,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorTag, Marker, MarkerId, MarkerStore};

    fn marker(id: u32, title: &str) -> Marker {
        Marker {
            id: MarkerId(id),
            title: title.to_string(),
            lat_deg: 0.0,
            lng_deg: 0.0,
            country_code: "US".to_string(),
            iso3: "USA".to_string(),
            color: ColorTag::from_index(id as usize),
            url: None,
            summary: None,
            location_label: "United States".to_string(),
        }
    }

    #[test]
    fn color_alternates_by_parity() {
        assert_eq!(ColorTag::from_index(0), ColorTag::Blue);
        assert_eq!(ColorTag::from_index(1), ColorTag::Pink);
        assert_eq!(ColorTag::from_index(2), ColorTag::Blue);
    }

    #[test]
    fn replace_is_wholesale() {
        let mut store = MarkerStore::new();
        store.replace(vec![marker(0, "a"), marker(1, "b")]);
        assert_eq!(store.len(), 2);

        store.replace(vec![marker(0, "c")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(MarkerId(0)).map(|m| m.title.as_str()), Some("c"));
        assert!(store.get(MarkerId(1)).is_none());
    }
}
