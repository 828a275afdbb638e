//! Country code normalization.
//!
//! The news feed tags locations with FIPS 10-4 codes while the polygon
//! dataset is keyed by ISO-3166 alpha-3, so every marker crosses this table
//! once at ingestion. A miss maps to [`UNMAPPED_ISO3`], never an error.

/// Sentinel for source codes with no ISO mapping. Markers carrying it still
/// render; they just cannot highlight a country polygon.
pub const UNMAPPED_ISO3: &str = "DYNAMIC";

/// FIPS 10-4 -> ISO-3166 alpha-3, covering the codes the feed emits.
const FIPS_TO_ISO3: &[(&str, &str)] = &[
    ("AF", "AFG"),
    ("AG", "DZA"),
    ("AJ", "AZE"),
    ("AL", "ALB"),
    ("AM", "ARM"),
    ("AO", "AGO"),
    ("AR", "ARG"),
    ("AS", "AUS"),
    ("AU", "AUT"),
    ("BA", "BHR"),
    ("BE", "BEL"),
    ("BG", "BGD"),
    ("BK", "BIH"),
    ("BL", "BOL"),
    ("BM", "MMR"),
    ("BO", "BLR"),
    ("BR", "BRA"),
    ("BU", "BGR"),
    ("CA", "CAN"),
    ("CB", "KHM"),
    ("CE", "LKA"),
    ("CH", "CHN"),
    ("CI", "CHL"),
    ("CM", "CMR"),
    ("CO", "COL"),
    ("CS", "CRI"),
    ("CU", "CUB"),
    ("CY", "CYP"),
    ("DA", "DNK"),
    ("DR", "DOM"),
    ("EC", "ECU"),
    ("EG", "EGY"),
    ("EI", "IRL"),
    ("EN", "EST"),
    ("ES", "SLV"),
    ("ET", "ETH"),
    ("EZ", "CZE"),
    ("FI", "FIN"),
    ("FR", "FRA"),
    ("GH", "GHA"),
    ("GM", "DEU"),
    ("GR", "GRC"),
    ("GT", "GTM"),
    ("HA", "HTI"),
    ("HO", "HND"),
    ("HR", "HRV"),
    ("HU", "HUN"),
    ("IC", "ISL"),
    ("ID", "IDN"),
    ("IN", "IND"),
    ("IR", "IRN"),
    ("IS", "ISR"),
    ("IT", "ITA"),
    ("IZ", "IRQ"),
    ("JA", "JPN"),
    ("JM", "JAM"),
    ("JO", "JOR"),
    ("KE", "KEN"),
    ("KN", "PRK"),
    ("KS", "KOR"),
    ("KU", "KWT"),
    ("KZ", "KAZ"),
    ("LE", "LBN"),
    ("LG", "LVA"),
    ("LH", "LTU"),
    ("LO", "SVK"),
    ("LU", "LUX"),
    ("LY", "LBY"),
    ("MD", "MDA"),
    ("MG", "MNG"),
    ("MJ", "MNE"),
    ("MO", "MAR"),
    ("MX", "MEX"),
    ("MY", "MYS"),
    ("MZ", "MOZ"),
    ("NG", "NER"),
    ("NI", "NGA"),
    ("NL", "NLD"),
    ("NO", "NOR"),
    ("NP", "NPL"),
    ("NU", "NIC"),
    ("NZ", "NZL"),
    ("PA", "PRY"),
    ("PE", "PER"),
    ("PK", "PAK"),
    ("PL", "POL"),
    ("PM", "PAN"),
    ("PO", "PRT"),
    ("QA", "QAT"),
    ("RI", "SRB"),
    ("RO", "ROU"),
    ("RP", "PHL"),
    ("RS", "RUS"),
    ("RW", "RWA"),
    ("SA", "SAU"),
    ("SF", "ZAF"),
    ("SG", "SEN"),
    ("SI", "SVN"),
    ("SN", "SGP"),
    ("SP", "ESP"),
    ("SU", "SDN"),
    ("SW", "SWE"),
    ("SY", "SYR"),
    ("SZ", "CHE"),
    ("TH", "THA"),
    ("TI", "TJK"),
    ("TU", "TUR"),
    ("TW", "TWN"),
    ("TX", "TKM"),
    ("TZ", "TZA"),
    ("UG", "UGA"),
    ("UK", "GBR"),
    ("UP", "UKR"),
    ("US", "USA"),
    ("UY", "URY"),
    ("UZ", "UZB"),
    ("VE", "VEN"),
    ("VM", "VNM"),
    ("YM", "YEM"),
    ("ZA", "ZMB"),
    ("ZI", "ZWE"),
];

/// Normalizes a raw source country code.
///
/// Unrecognized or empty codes return the sentinel.
pub fn iso3_for_source_code(code: &str) -> &'static str {
    // The table is sorted by FIPS code (guarded by a test below).
    FIPS_TO_ISO3
        .binary_search_by_key(&code, |(fips, _)| fips)
        .map(|idx| FIPS_TO_ISO3[idx].1)
        .unwrap_or(UNMAPPED_ISO3)
}

/// Patches for polygon-dataset rows whose ISO_A3 field is the `-99`
/// placeholder, keyed by admin name.
pub fn patched_iso3_for_admin(admin_name: &str) -> Option<&'static str> {
    match admin_name {
        "France" => Some("FRA"),
        "Norway" => Some("NOR"),
        "Somaliland" => Some("SOM"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{UNMAPPED_ISO3, iso3_for_source_code, patched_iso3_for_admin};

    #[test]
    fn maps_known_fips_codes() {
        assert_eq!(iso3_for_source_code("GM"), "DEU");
        assert_eq!(iso3_for_source_code("UK"), "GBR");
        assert_eq!(iso3_for_source_code("JA"), "JPN");
        assert_eq!(iso3_for_source_code("US"), "USA");
    }

    #[test]
    fn unknown_code_maps_to_sentinel() {
        assert_eq!(iso3_for_source_code("ZZ"), UNMAPPED_ISO3);
        assert_eq!(iso3_for_source_code(""), UNMAPPED_ISO3);
    }

    #[test]
    fn table_is_sorted_and_unique() {
        let codes: Vec<&str> = super::FIPS_TO_ISO3.iter().map(|(fips, _)| *fips).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn polygon_gaps_are_patched() {
        assert_eq!(patched_iso3_for_admin("France"), Some("FRA"));
        assert_eq!(patched_iso3_for_admin("Norway"), Some("NOR"));
        assert_eq!(patched_iso3_for_admin("Somaliland"), Some("SOM"));
        assert_eq!(patched_iso3_for_admin("Atlantis"), None);
    }
}
