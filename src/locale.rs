use core::cmp::Ordering;

/// Locale collaborator: resolves region codes to display names and compares
/// display names under the locale's collation order.
///
/// Country columns sort and filter by the *resolved display name*, never by
/// the raw code, because code order and name order diverge (under `en`,
/// `"DE"`/Germany sorts after `"CA"`/Canada because "Canada" < "Germany",
/// while `"EE"`/Estonia sorts before `"DE"` despite `"DE" < "EE"` as codes).
pub trait RegionNames {
    /// Display name for an ISO region code, or `None` when unknown.
    fn name(&self, code: &str) -> Option<String>;

    /// Collation order for two display names.
    ///
    /// The default is case-insensitive lexicographic order, which is
    /// adequate for ASCII names; implementations backed by a real collator
    /// should override it.
    fn compare_names(&self, left: &str, right: &str) -> Ordering {
        left.to_lowercase().cmp(&right.to_lowercase())
    }

    /// Resolved name, falling back to the raw code for unknown codes so that
    /// filtering and sorting stay total and deterministic.
    fn name_or_code(&self, code: &str) -> String {
        self.name(code).unwrap_or_else(|| code.to_string())
    }
}

/// Built-in English fallback resolver backed by a static table.
///
/// Hosts with real localization facilities should plug their own
/// [`RegionNames`] via [`crate::GridOptions::with_regions`]; this type
/// exists so the engine is usable out of the box.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishRegions;

// Sorted by code for binary search.
static ENGLISH_NAMES: &[(&str, &str)] = &[
    ("AR", "Argentina"),
    ("AT", "Austria"),
    ("AU", "Australia"),
    ("BE", "Belgium"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CH", "Switzerland"),
    ("CL", "Chile"),
    ("CN", "China"),
    ("CO", "Colombia"),
    ("CZ", "Czechia"),
    ("DE", "Germany"),
    ("DK", "Denmark"),
    ("EE", "Estonia"),
    ("EG", "Egypt"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("GR", "Greece"),
    ("HU", "Hungary"),
    ("ID", "Indonesia"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IN", "India"),
    ("IT", "Italy"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("MX", "Mexico"),
    ("NG", "Nigeria"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("NZ", "New Zealand"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("RO", "Romania"),
    ("SE", "Sweden"),
    ("SG", "Singapore"),
    ("TR", "Türkiye"),
    ("UA", "Ukraine"),
    ("US", "United States"),
    ("VN", "Vietnam"),
    ("ZA", "South Africa"),
];

impl RegionNames for EnglishRegions {
    fn name(&self, code: &str) -> Option<String> {
        let code = code.to_ascii_uppercase();
        ENGLISH_NAMES
            .binary_search_by_key(&code.as_str(), |(c, _)| c)
            .ok()
            .map(|i| ENGLISH_NAMES[i].1.to_string())
    }
}
