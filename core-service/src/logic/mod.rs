//! Logic Module - Business Logic & Engines
//!
//! - `features/` - Feature encoding (InputRecord → FeatureVector)
//! - `model/` - Next-hour load inference (ONNX, fixed stub)
//! - `risk/` - Utilization and risk tier classification
//! - `assessment` - The full encode → predict → classify pipeline
//! - `charts` - Chart series derived from an assessment

pub mod assessment;
pub mod charts;
pub mod features;
pub mod model;
pub mod risk;
