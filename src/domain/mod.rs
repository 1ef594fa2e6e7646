// Domain layer - Vital-signs models and pure derivations
pub mod error;
pub mod granularity;
pub mod metrics;
pub mod report;
pub mod sample;
pub mod series;
pub mod session;
pub mod theme;
