//! GridGuard Core - transformer overload prediction
//!
//! Encodes user-entered transformer telemetry into the feature layout the
//! load regressor was trained on, runs the regressor, and classifies the
//! predicted next-hour load into a risk tier.
//!
//! ```text
//! InputRecord ──encode──▶ FeatureVector ──LoadModel::predict──▶ MW
//!                                                   │
//!                         RiskTier ◀──classify── utilization %
//! ```

pub mod constants;
pub mod error;
pub mod logic;

pub use error::{GridGuardError, Result};
pub use logic::assessment::{Assessment, Assessor};
pub use logic::charts::{build_charts, DashboardCharts};
pub use logic::features::{encode, AreaType, FeatureVector, InputRecord};
pub use logic::model::{FixedLoadModel, LoadModel, ModelStatus, OnnxLoadModel};
pub use logic::risk::{classify, RiskThresholds, RiskTier};
