//! Birth-date signature engine.
//!
//! Everyone born on a given calendar day shares the slow-moving part of
//! their chart. This crate samples that day as a grid of hypothetical
//! charts (time slices x anchor locations), scores each with Ashtakavarga,
//! and summarises what stays constant and what depends on birth time.
//!
//! This crate provides:
//! - Position sources: a frozen demo sky and a mean-element ephemeris
//! - Chart snapshots scored with full and Lagna-free SAV and shodhita
//! - The parallel sampling matrix and the trikona purifier
//! - Statistical analysis into a serializable [`SignatureReport`]
//! - [`SignatureEngine`], which runs the whole pipeline

pub mod analysis;
pub mod chart;
pub mod config;
pub mod error;
pub mod matrix;
pub mod pipeline;
pub mod purifier;
pub mod source;

pub use analysis::{SignatureReport, analyze};
pub use chart::{BodyPosition, ChartSnapshot, House, SkyPositions};
pub use config::{
    AnalysisConfig, AnchorLocation, DEFAULT_RASHI_MULTIPLIERS, JanmaConfig, ReferenceSample,
    SamplingConfig, TransitBody, default_locations,
};
pub use error::{AnalysisError, ConfigError, JanmaError, SourceError};
pub use matrix::{MatrixEntry, SampleMatrix, TimeSlice, generate_matrix, time_slices};
pub use pipeline::{SignatureEngine, parse_birth_date};
pub use purifier::{purify_chart, purify_matrix};
pub use source::{FixedSkySource, MeanMotionSource, PositionSource, compute_chart};
