//! Features Module - Feature Encoding Engine
//!
//! Turns a user-entered InputRecord into the fixed-width vector the
//! regression model was trained on.

pub mod encoder;
pub mod input;
pub mod layout;
pub mod vector;


// Re-export common types
pub use encoder::{encode, encode_raw, to_columns};
pub use input::{AreaType, InputRecord};
pub use layout::{LayoutInfo, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use vector::FeatureVector;
