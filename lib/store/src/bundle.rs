use crate::artifact::{DistanceArtifact, SimilarityArtifact};
use propx_core::{DistanceTable, Error, ItemCatalog, Recommender, Result, SquareMatrix};
use serde::de::DeserializeOwned;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// File stems of the three similarity artifacts, in blend order:
/// facilities, price details, location advantages.
pub const SIMILARITY_STEMS: [&str; 3] = [
    "similarity_facilities",
    "similarity_price",
    "similarity_location",
];

/// File stem of the distance table artifact.
pub const DISTANCE_STEM: &str = "distances";

/// The full set of artifacts read from an artifact directory, validated for
/// cross-artifact consistency but not yet blended.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub similarities: [SimilarityArtifact; 3],
    pub distances: DistanceArtifact,
}

impl ArtifactBundle {
    /// Read all four artifacts from a directory.
    ///
    /// Each stem resolves to `<stem>.json` (serde_json) or `<stem>.bin`
    /// (bincode), whichever is present; JSON wins when both are. The bundle
    /// is rejected unless every artifact carries the same item list in the
    /// same order.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        let [s1, s2, s3] = SIMILARITY_STEMS;
        let bundle = Self {
            similarities: [
                read_artifact::<SimilarityArtifact>(dir, s1)?,
                read_artifact::<SimilarityArtifact>(dir, s2)?,
                read_artifact::<SimilarityArtifact>(dir, s3)?,
            ],
            distances: read_artifact::<DistanceArtifact>(dir, DISTANCE_STEM)?,
        };
        bundle.validate()?;

        info!(
            "Loaded artifact bundle: {} properties, {} reference locations",
            bundle.similarities[0].items.len(),
            bundle.distances.locations.len()
        );
        Ok(bundle)
    }

    /// Cross-artifact consistency: identical item lists, identical order.
    fn validate(&self) -> Result<()> {
        let items = &self.similarities[0].items;
        for (stem, artifact) in SIMILARITY_STEMS.iter().zip(&self.similarities).skip(1) {
            if &artifact.items != items {
                return Err(Error::ItemMismatch(format!(
                    "{stem} does not list the same items as {}",
                    SIMILARITY_STEMS[0]
                )));
            }
        }
        if &self.distances.items != items {
            return Err(Error::ItemMismatch(format!(
                "{DISTANCE_STEM} does not list the same items as {}",
                SIMILARITY_STEMS[0]
            )));
        }
        Ok(())
    }

    /// Build the query engine from the loaded artifacts.
    pub fn into_recommender(self) -> Result<Recommender> {
        let [facilities, price, location] = self.similarities;

        let catalog = ItemCatalog::new(facilities.items)?;
        let facilities = SquareMatrix::from_rows(facilities.matrix)?;
        let price = SquareMatrix::from_rows(price.matrix)?;
        let location = SquareMatrix::from_rows(location.matrix)?;

        let columns = self
            .distances
            .locations
            .into_iter()
            .map(|column| (column.name, column.meters))
            .collect();
        let distances = DistanceTable::from_columns(&catalog, columns)?;

        Recommender::new(catalog, facilities, price, location, distances)
    }
}

fn read_artifact<T: DeserializeOwned>(dir: &Path, stem: &str) -> Result<T> {
    let json_path = dir.join(format!("{stem}.json"));
    if json_path.is_file() {
        let file = std::fs::File::open(&json_path)?;
        return serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::Serialization(format!("{}: {e}", json_path.display())));
    }

    let bin_path = dir.join(format!("{stem}.bin"));
    if bin_path.is_file() {
        let bytes = std::fs::read(&bin_path)?;
        return bincode::deserialize(&bytes)
            .map_err(|e| Error::Serialization(format!("{}: {e}", bin_path.display())));
    }

    Err(Error::ArtifactMissing(format!(
        "{stem}.json or {stem}.bin in {}",
        dir.display()
    )))
}
