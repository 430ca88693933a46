//! Inference Engine - ONNX Runtime Integration
//!
//! Loads the exported next-hour load regressor and runs it on one
//! FeatureVector at a time. The artifact is read once at startup; a missing
//! or unreadable file is `ModelUnavailable` and there is no heuristic
//! fallback.

use std::path::Path;
use std::time::Instant;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::stats::{InferenceStats, StatsSnapshot};
use crate::error::{GridGuardError, Result};
use crate::logic::features::{layout::layout_hash, FeatureVector, FEATURE_COUNT};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    /// "onnx" or "fixed"
    pub engine: String,
    /// SHA-256 of the artifact bytes
    pub sha256: Option<String>,
    pub features: usize,
    pub layout_hash: u32,
    pub output_name: Option<String>,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Model status for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    pub metadata: ModelMetadata,
    pub stats: StatsSnapshot,
}

// ============================================================================
// MODEL TRAIT
// ============================================================================

/// Anything that turns a FeatureVector into a next-hour load (MW)
pub trait LoadModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f32>;

    fn metadata(&self) -> &ModelMetadata;

    fn stats(&self) -> StatsSnapshot;

    fn status(&self) -> ModelStatus {
        ModelStatus {
            metadata: self.metadata().clone(),
            stats: self.stats(),
        }
    }
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// Regressor exported to ONNX, input `[1, FEATURE_COUNT]` f32
pub struct OnnxLoadModel {
    /// `run` needs exclusive access to the session
    session: Mutex<Session>,
    output_name: String,
    metadata: ModelMetadata,
    stats: InferenceStats,
}

impl OnnxLoadModel {
    /// Load ONNX model from file
    pub fn load(model_path: impl AsRef<Path>) -> Result<Self> {
        let path = model_path.as_ref();
        log::info!("Loading ONNX model from: {}", path.display());

        if !path.exists() {
            return Err(GridGuardError::ModelUnavailable(format!(
                "Model not found: {}",
                path.display()
            )));
        }

        let bytes = std::fs::read(path).map_err(|e| {
            GridGuardError::ModelUnavailable(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::load_from_bytes(&bytes, &path.display().to_string())
    }

    /// Load ONNX model from bytes; `origin` is only recorded in metadata
    pub fn load_from_bytes(model_bytes: &[u8], origin: &str) -> Result<Self> {
        log::info!("Loading ONNX model from memory ({} bytes)", model_bytes.len());

        let session = Session::builder()
            .map_err(|e| unavailable("Failed to create session builder", e))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| unavailable("Failed to set optimization", e))?
            .commit_from_memory(model_bytes)
            .map_err(|e| unavailable("Failed to load model", e))?;

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| GridGuardError::ModelUnavailable("Model has no outputs".to_string()))?;

        let metadata = ModelMetadata {
            model_path: origin.to_string(),
            engine: "onnx".to_string(),
            sha256: Some(hex::encode(Sha256::digest(model_bytes))),
            features: FEATURE_COUNT,
            layout_hash: layout_hash(),
            output_name: Some(output_name.clone()),
            loaded_at: chrono::Utc::now(),
        };

        log::info!(
            "ONNX model loaded successfully (output '{}', sha256 {})",
            output_name,
            metadata.sha256.as_deref().unwrap_or("-")
        );

        Ok(Self {
            session: Mutex::new(session),
            output_name,
            metadata,
            stats: InferenceStats::new(),
        })
    }

    fn run(&self, features: &FeatureVector) -> Result<f32> {
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.values.to_vec())
            .map_err(|e| GridGuardError::SchemaMismatch(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| GridGuardError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| GridGuardError::Inference(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| GridGuardError::Inference(format!("No output '{}'", self.output_name)))?;

        // skl2onnx emits f32 by default; double-precision exports are narrowed
        let first = match output.try_extract_tensor::<f32>() {
            Ok((_, data)) => data.first().copied(),
            Err(_) => {
                let (_, data) = output
                    .try_extract_tensor::<f64>()
                    .map_err(|e| GridGuardError::Inference(format!("Extract error: {}", e)))?;
                data.first().map(|v| *v as f32)
            }
        };

        first.ok_or_else(|| GridGuardError::Inference("Empty model output".to_string()))
    }
}

impl LoadModel for OnnxLoadModel {
    fn predict(&self, features: &FeatureVector) -> Result<f32> {
        features.validate()?;

        let start_time = Instant::now();
        let result = self.run(features).and_then(finite);

        match &result {
            Ok(load) => {
                self.stats.record(start_time.elapsed());
                log::debug!("ONNX predicted {:.3} MW", load);
            }
            Err(e) => {
                self.stats.record_failure();
                log::warn!("ONNX prediction failed: {}", e);
            }
        }

        result
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

// ============================================================================
// FIXED IMPLEMENTATION
// ============================================================================

/// Returns the same load for every input. For tests and dry runs
/// without a model artifact.
pub struct FixedLoadModel {
    load_mw: f32,
    metadata: ModelMetadata,
    stats: InferenceStats,
}

impl FixedLoadModel {
    pub fn new(load_mw: f32) -> Self {
        Self {
            load_mw,
            metadata: ModelMetadata {
                model_path: "<fixed>".to_string(),
                engine: "fixed".to_string(),
                sha256: None,
                features: FEATURE_COUNT,
                layout_hash: layout_hash(),
                output_name: None,
                loaded_at: chrono::Utc::now(),
            },
            stats: InferenceStats::new(),
        }
    }
}

impl LoadModel for FixedLoadModel {
    fn predict(&self, features: &FeatureVector) -> Result<f32> {
        features.validate()?;
        let start_time = Instant::now();
        let load = finite(self.load_mw)?;
        self.stats.record(start_time.elapsed());
        Ok(load)
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn unavailable(context: &str, err: impl std::fmt::Display) -> GridGuardError {
    GridGuardError::ModelUnavailable(format!("{}: {}", context, err))
}

fn finite(load: f32) -> Result<f32> {
    if load.is_finite() {
        Ok(load)
    } else {
        Err(GridGuardError::Inference(format!("Model returned {}", load)))
    }
}
