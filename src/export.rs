//! JSON export of a complete ranking.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::zone::RankedZone;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub struct RankingExporter {
    path: PathBuf,
}

impl RankingExporter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every ranked zone as a pretty-printed JSON array, replacing the file.
    pub fn write(&self, ranking: &[RankedZone]) -> Result<(), ExportError> {
        let file = File::create(&self.path).map_err(|source| self.io_error(source))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, ranking).map_err(|source| ExportError::Json {
            path: self.path.clone(),
            source,
        })?;
        writer.write_all(b"\n").map_err(|source| self.io_error(source))?;
        writer.flush().map_err(|source| self.io_error(source))
    }

    pub fn read(&self) -> Result<Vec<RankedZone>, ExportError> {
        let file = File::open(&self.path).map_err(|source| self.io_error(source))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ExportError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn io_error(&self, source: std::io::Error) -> ExportError {
        ExportError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ranking::{rank, ranked_views},
        zone::{ScoreWeights, Zone},
    };
    use tempfile::tempdir;

    #[test]
    fn exports_every_zone_in_rank_order() {
        let temp = tempdir().expect("tempdir");
        let ranked = rank(vec![
            Zone::new(1, "A", 8.0, 6.0, 7.0, 2.0),
            Zone::new(2, "B", 5.0, 5.0, 5.0, 5.0),
            Zone::new(3, "C", 9.0, 9.0, 1.0, 0.0),
            Zone::new(4, "D", 0.0, 0.0, 0.0, 0.0),
        ]);
        let views = ranked_views(&ranked, &ScoreWeights::default());
        let exporter = RankingExporter::new(temp.path().join("ranking.json"));
        exporter.write(&views).unwrap();

        let loaded = exporter.read().unwrap();
        assert_eq!(loaded.len(), 4);
        let ids: Vec<_> = loaded.iter().map(|zone| zone.id).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
        assert_eq!(loaded[3].rank, 4);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let temp = tempdir().expect("tempdir");
        let exporter = RankingExporter::new(temp.path().join("absent").join("ranking.json"));
        let err = exporter.write(&[]).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
