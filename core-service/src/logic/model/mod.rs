//! Model Module - next-hour load inference
//!
//! The trained regressor is an injected capability behind `LoadModel`,
//! so encoding and classification can run against a stub.

pub mod inference;
pub mod stats;

// Re-export common types
pub use inference::{FixedLoadModel, LoadModel, ModelMetadata, ModelStatus, OnnxLoadModel};
pub use stats::{InferenceStats, StatsSnapshot};
