use crate::{Error, Result};
use ahash::AHashMap;

/// The ordered set of property identifiers shared by every loaded artifact.
///
/// Position in the catalog doubles as the row/column index into the
/// similarity matrices and the distance table, so the catalog is the single
/// place that translates between identifiers and matrix positions.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    ids: Vec<String>,
    index: AHashMap<String, usize>,
}

impl ItemCatalog {
    /// Build a catalog from identifiers in artifact order.
    ///
    /// Identifiers must be unique; a repeated id would make matrix rows
    /// ambiguous.
    pub fn new(ids: Vec<String>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(ids.len());
        for (row, id) in ids.iter().enumerate() {
            if index.insert(id.clone(), row).is_some() {
                return Err(Error::DuplicateItem(id.clone()));
            }
        }
        Ok(Self { ids, index })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Matrix row for an identifier.
    pub fn row_of(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| Error::ItemNotFound(id.to_string()))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Identifier at a matrix row.
    #[inline]
    #[must_use]
    pub fn id_at(&self, row: usize) -> &str {
        &self.ids[row]
    }

    /// All identifiers in matrix order.
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// All identifiers sorted lexicographically, for listings.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids = self.ids.clone();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ItemCatalog {
        ItemCatalog::new(vec![
            "Emerald Court".to_string(),
            "Palm Grove".to_string(),
            "Ansal Heights".to_string(),
        ])
        .unwrap()
    }

    #[test]
    fn test_row_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.row_of("Palm Grove").unwrap(), 1);
        assert_eq!(catalog.id_at(2), "Ansal Heights");
    }

    #[test]
    fn test_unknown_id_fails() {
        let catalog = catalog();
        assert!(matches!(
            catalog.row_of("Nowhere Towers"),
            Err(Error::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = ItemCatalog::new(vec!["A".to_string(), "A".to_string()]);
        assert!(matches!(result, Err(Error::DuplicateItem(_))));
    }

    #[test]
    fn test_sorted_ids() {
        let catalog = catalog();
        assert_eq!(
            catalog.sorted_ids(),
            vec!["Ansal Heights", "Emerald Court", "Palm Grove"]
        );
    }
}
