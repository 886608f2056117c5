//! Persisted model bundle storage.
//!
//! The trained model is serialized as an opaque blob: a four-byte magic
//! header, a format version byte, then the bincode-encoded bundle. Loading
//! validates the header before decoding; anything structurally invalid is
//! reported as absent so the caller rebuilds from scratch instead of
//! failing startup.
//!
//! Writes go to a sibling temp file first and are renamed into place, so a
//! crash mid-write never leaves a torn bundle behind.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::engine::model::TrainedModel;
use crate::error::{JalmitraError, Result};

/// Magic bytes identifying a Jalmitra model bundle.
const MAGIC: &[u8; 4] = b"JLMB";

/// Current bundle format version.
const FORMAT_VERSION: u8 = 1;

/// Persist the model bundle at the given path.
pub fn save_model(model: &TrainedModel, path: &Path) -> Result<()> {
    let payload =
        bincode::serialize(model).map_err(|e| JalmitraError::storage(format!("encode failed: {e}")))?;

    let mut bytes = Vec::with_capacity(MAGIC.len() + 1 + payload.len());
    bytes.extend_from_slice(MAGIC);
    bytes.push(FORMAT_VERSION);
    bytes.extend_from_slice(&payload);

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, &bytes)?;
    fs::rename(&tmp_path, path)?;

    info!("persisted model bundle to {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Load the model bundle if present and structurally valid.
///
/// Returns `Ok(None)` when the file is missing or invalid (wrong magic,
/// unsupported version, or undecodable payload); invalid bundles are
/// logged, not surfaced, since a rebuild recovers from all of them.
pub fn load_model(path: &Path) -> Result<Option<TrainedModel>> {
    if !path.exists() {
        return Ok(None);
    }

    let bytes = fs::read(path)?;
    if bytes.len() <= MAGIC.len() + 1 || &bytes[..MAGIC.len()] != MAGIC {
        warn!("model bundle at {} has invalid header; rebuilding", path.display());
        return Ok(None);
    }
    if bytes[MAGIC.len()] != FORMAT_VERSION {
        warn!(
            "model bundle at {} has unsupported format version {}; rebuilding",
            path.display(),
            bytes[MAGIC.len()]
        );
        return Ok(None);
    }

    match bincode::deserialize::<TrainedModel>(&bytes[MAGIC.len() + 1..]) {
        Ok(model) => {
            info!("loaded model bundle from {}", path.display());
            Ok(Some(model))
        }
        Err(e) => {
            warn!("model bundle at {} failed to decode: {e}; rebuilding", path.display());
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::model::TrainedModel;
    use crate::knowledge::enrichment::{Enrichment, EnrichmentMap};
    use crate::knowledge::KnowledgeBaseBuilder;

    fn trained_model() -> TrainedModel {
        let builder = KnowledgeBaseBuilder::new();
        let enrichment = Enrichment::Fetched(EnrichmentMap::new());
        TrainedModel::train(&builder, &enrichment, &EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        let model = trained_model();

        save_model(&model, &path).unwrap();
        let loaded = load_model(&path).unwrap().expect("bundle should load");

        assert_eq!(
            loaded.vectorizer.vocabulary_size(),
            model.vectorizer.vocabulary_size()
        );
        assert_eq!(loaded.response_index.len(), model.response_index.len());
        assert_eq!(loaded.trained_at, model.trained_at);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.bin");
        assert!(load_model(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_bundle_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");

        fs::write(&path, b"not a model bundle at all").unwrap();
        assert!(load_model(&path).unwrap().is_none());

        // Right magic, bogus payload.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(MAGIC);
        bytes.push(FORMAT_VERSION);
        bytes.extend_from_slice(&[0xFF; 16]);
        fs::write(&path, &bytes).unwrap();
        assert!(load_model(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_unsupported_version_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");

        let mut bytes = Vec::new();
        bytes.extend_from_slice(MAGIC);
        bytes.push(FORMAT_VERSION + 1);
        bytes.extend_from_slice(&bincode::serialize(&trained_model()).unwrap());
        fs::write(&path, &bytes).unwrap();

        assert!(load_model(&path).unwrap().is_none());
    }
}
