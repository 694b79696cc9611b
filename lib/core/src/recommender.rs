use crate::{DistanceTable, Error, ItemCatalog, Result, SquareMatrix};
use serde::Serialize;

/// Weights applied to the three similarity sources when blending them into
/// one score matrix.
///
/// The defaults are the production constants: facility similarity counts for
/// half, price-detail similarity slightly less than full, and location
/// similarity at full weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub facilities: f32,
    pub price: f32,
    pub location: f32,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            facilities: 0.5,
            price: 0.8,
            location: 1.0,
        }
    }
}

/// A property ranked by blended similarity score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    pub id: String,
    pub score: f32,
}

/// A property within a search radius, with its distance in meters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyItem {
    pub id: String,
    pub meters: f32,
}

/// Answers similarity and proximity queries over immutable loaded artifacts.
///
/// The three source matrices are blended once at construction; every query
/// afterwards is a pure read, so a shared `Recommender` can serve concurrent
/// callers without locking.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: ItemCatalog,
    combined: SquareMatrix,
    distances: DistanceTable,
}

impl Recommender {
    /// Build a recommender with the default blend weights.
    pub fn new(
        catalog: ItemCatalog,
        facilities: SquareMatrix,
        price: SquareMatrix,
        location: SquareMatrix,
        distances: DistanceTable,
    ) -> Result<Self> {
        Self::with_weights(
            catalog,
            facilities,
            price,
            location,
            BlendWeights::default(),
            distances,
        )
    }

    /// Build a recommender, validating that every matrix and the distance
    /// table are aligned to the catalog before blending.
    pub fn with_weights(
        catalog: ItemCatalog,
        facilities: SquareMatrix,
        price: SquareMatrix,
        location: SquareMatrix,
        weights: BlendWeights,
        distances: DistanceTable,
    ) -> Result<Self> {
        let n = catalog.len();
        for matrix in [&facilities, &price, &location] {
            if matrix.order() != n {
                return Err(Error::DimensionMismatch {
                    expected: n,
                    actual: matrix.order(),
                });
            }
        }
        if distances.item_count() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                actual: distances.item_count(),
            });
        }

        let combined = &(&(&facilities * weights.facilities) + &(&price * weights.price))
            + &(&location * weights.location);

        Ok(Self {
            catalog,
            combined,
            distances,
        })
    }

    /// The `top_n` properties most similar to `item_id` under the blended
    /// score, highest first. The queried property itself is never returned:
    /// its self-similarity is maximal, so it occupies the first rank and is
    /// discarded.
    ///
    /// Equal scores keep matrix order (stable sort); no secondary sort key is
    /// imposed. Scores are returned unrounded. `top_n = 0` yields an empty
    /// vec, and a `top_n` beyond the catalog size yields every other
    /// property ranked.
    pub fn recommend_similar(&self, item_id: &str, top_n: usize) -> Result<Vec<ScoredItem>> {
        let row = self.catalog.row_of(item_id)?;

        let mut ranked: Vec<(usize, f32)> =
            self.combined.row(row).iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(ranked
            .into_iter()
            .skip(1)
            .take(top_n)
            .map(|(i, score)| ScoredItem {
                id: self.catalog.id_at(i).to_string(),
                score,
            })
            .collect())
    }

    /// Every property strictly closer than `radius_meters` to the named
    /// location, nearest first.
    ///
    /// A distance exactly equal to the radius is excluded. No matches is an
    /// empty vec, not an error; a non-positive radius therefore yields an
    /// empty vec as well.
    pub fn find_within_radius(&self, location: &str, radius_meters: f32) -> Result<Vec<NearbyItem>> {
        let column = self.distances.column(location)?;

        let mut hits: Vec<NearbyItem> = column
            .iter()
            .enumerate()
            .filter(|&(_, &meters)| meters < radius_meters)
            .map(|(i, &meters)| NearbyItem {
                id: self.catalog.id_at(i).to_string(),
                meters,
            })
            .collect();
        hits.sort_by(|a, b| {
            a.meters
                .partial_cmp(&b.meters)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(hits)
    }

    #[inline]
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.catalog.len()
    }

    #[inline]
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.distances.location_count()
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// The blended score matrix.
    #[inline]
    #[must_use]
    pub fn combined(&self) -> &SquareMatrix {
        &self.combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(order: usize) -> SquareMatrix {
        let rows = (0..order)
            .map(|i| (0..order).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        SquareMatrix::from_rows(rows).unwrap()
    }

    /// Engine whose combined matrix is [[1,0.2,0.9],[0.2,1,0.3],[0.9,0.3,1]]
    /// over items [A, B, C], with a "Downtown" distance column.
    fn engine() -> Recommender {
        let catalog =
            ItemCatalog::new(vec!["A".to_string(), "B".to_string(), "C".to_string()]).unwrap();
        // The location slot has unit weight, so feeding the target there and
        // zeros elsewhere makes the combined matrix equal the target exactly.
        let zero = SquareMatrix::from_rows(vec![vec![0.0; 3]; 3]).unwrap();
        let target = SquareMatrix::from_rows(vec![
            vec![1.0, 0.2, 0.9],
            vec![0.2, 1.0, 0.3],
            vec![0.9, 0.3, 1.0],
        ])
        .unwrap();
        let distances = DistanceTable::from_columns(
            &catalog,
            vec![("Downtown".to_string(), vec![4000.0, 6000.0, 9000.0])],
        )
        .unwrap();
        Recommender::new(catalog, zero.clone(), zero, target, distances).unwrap()
    }

    #[test]
    fn test_blend_weights() {
        let catalog = ItemCatalog::new(vec!["A".to_string(), "B".to_string()]).unwrap();
        let ones = SquareMatrix::from_rows(vec![vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap();
        let distances = DistanceTable::from_columns(&catalog, vec![]).unwrap();
        let engine =
            Recommender::new(catalog, ones.clone(), ones.clone(), ones, distances).unwrap();
        // 0.5 + 0.8 + 1.0
        assert!((engine.combined().get(0, 1) - 2.3).abs() < 1e-6);
    }

    #[test]
    fn test_recommend_concrete_scenario() {
        let results = engine().recommend_similar("A", 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "C");
        assert!((results[0].score - 0.9).abs() < 1e-6);
        assert_eq!(results[1].id, "B");
        assert!((results[1].score - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_recommend_never_includes_self() {
        let engine = engine();
        for id in ["A", "B", "C"] {
            let results = engine.recommend_similar(id, 10).unwrap();
            assert!(results.iter().all(|s| s.id != id));
        }
    }

    #[test]
    fn test_recommend_returns_all_others_when_n_large() {
        let results = engine().recommend_similar("B", 99).unwrap();
        assert_eq!(results.len(), 2);
        let mut ids: Vec<&str> = results.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn test_recommend_sorted_descending() {
        let results = engine().recommend_similar("C", 2).unwrap();
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_recommend_zero_n_is_empty() {
        assert!(engine().recommend_similar("A", 0).unwrap().is_empty());
    }

    #[test]
    fn test_recommend_unknown_item_fails() {
        assert!(matches!(
            engine().recommend_similar("D", 5),
            Err(Error::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_recommend_ties_keep_matrix_order() {
        let catalog = ItemCatalog::new(vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
        ])
        .unwrap();
        let zero = SquareMatrix::from_rows(vec![vec![0.0; 4]; 4]).unwrap();
        // Row for A ties B and D at 0.5.
        let target = SquareMatrix::from_rows(vec![
            vec![1.0, 0.5, 0.7, 0.5],
            vec![0.5, 1.0, 0.0, 0.0],
            vec![0.7, 0.0, 1.0, 0.0],
            vec![0.5, 0.0, 0.0, 1.0],
        ])
        .unwrap();
        let distances = DistanceTable::from_columns(&catalog, vec![]).unwrap();
        let engine = Recommender::new(catalog, zero.clone(), zero, target, distances).unwrap();

        let results = engine.recommend_similar("A", 3).unwrap();
        let ids: Vec<&str> = results.iter().map(|s| s.id.as_str()).collect();
        // B precedes D because B comes first in matrix order.
        assert_eq!(ids, vec!["C", "B", "D"]);
    }

    #[test]
    fn test_radius_concrete_scenario() {
        // 5 km expressed in meters; only the 4000 m property qualifies.
        let results = engine().find_within_radius("Downtown", 5000.0).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "A");
        assert!((results[0].meters - 4000.0).abs() < 1e-6);
    }

    #[test]
    fn test_radius_boundary_is_exclusive() {
        // A distance exactly equal to the radius is excluded.
        let results = engine().find_within_radius("Downtown", 4000.0).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_radius_sorted_ascending_and_monotone() {
        let engine = engine();
        let near = engine.find_within_radius("Downtown", 7000.0).unwrap();
        let far = engine.find_within_radius("Downtown", 10000.0).unwrap();

        for pair in far.windows(2) {
            assert!(pair[0].meters <= pair[1].meters);
        }
        // Widening the radius never drops an already-included property.
        for item in &near {
            assert!(far.iter().any(|f| f.id == item.id));
        }
        assert_eq!(near.len(), 2);
        assert_eq!(far.len(), 3);
    }

    #[test]
    fn test_radius_no_match_is_empty() {
        assert!(engine()
            .find_within_radius("Downtown", 100.0)
            .unwrap()
            .is_empty());
        assert!(engine()
            .find_within_radius("Downtown", -5.0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_radius_unknown_location_fails() {
        assert!(matches!(
            engine().find_within_radius("Uptown", 5000.0),
            Err(Error::LocationNotFound(_))
        ));
    }

    #[test]
    fn test_misaligned_matrix_rejected() {
        let catalog = ItemCatalog::new(vec!["A".to_string(), "B".to_string()]).unwrap();
        let two = identity(2);
        let three = identity(3);
        let distances = DistanceTable::from_columns(&catalog, vec![]).unwrap();
        let result = Recommender::new(catalog, two.clone(), two, three, distances);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }
}
