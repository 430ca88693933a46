//! HTTP handlers

pub mod dashboard;
pub mod health;
pub mod model;
pub mod predict;
