use crate::{Error, ItemCatalog, Result};
use ahash::AHashMap;

/// Precomputed distances in meters from every catalog item to a set of named
/// reference locations.
///
/// One column per location, aligned to catalog order. Immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    item_count: usize,
    columns: AHashMap<String, Vec<f32>>,
}

impl DistanceTable {
    /// Build a table against a catalog, validating that every column carries
    /// exactly one distance per catalog item.
    pub fn from_columns(
        catalog: &ItemCatalog,
        columns: Vec<(String, Vec<f32>)>,
    ) -> Result<Self> {
        let item_count = catalog.len();
        let mut map = AHashMap::with_capacity(columns.len());
        for (name, meters) in columns {
            if meters.len() != item_count {
                return Err(Error::DimensionMismatch {
                    expected: item_count,
                    actual: meters.len(),
                });
            }
            if map.insert(name.clone(), meters).is_some() {
                return Err(Error::DuplicateLocation(name));
            }
        }
        Ok(Self { item_count, columns: map })
    }

    /// Per-item distances to a location, in catalog order.
    pub fn column(&self, location: &str) -> Result<&[f32]> {
        self.columns
            .get(location)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::LocationNotFound(location.to_string()))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, location: &str) -> bool {
        self.columns.contains_key(location)
    }

    /// Number of reference locations.
    #[inline]
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Location names sorted lexicographically, for listings.
    #[must_use]
    pub fn sorted_locations(&self) -> Vec<String> {
        let mut names: Vec<String> = self.columns.keys().cloned().collect();
        names.sort();
        names
    }
}
