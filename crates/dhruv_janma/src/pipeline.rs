//! End-to-end pipeline: date string in, signature report out.

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::analysis::{SignatureReport, analyze};
use crate::config::JanmaConfig;
use crate::error::JanmaError;
use crate::matrix::{SampleMatrix, generate_matrix};
use crate::purifier::purify_matrix;
use crate::source::PositionSource;

/// Parse a `YYYY-MM-DD` birth date.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, JanmaError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| JanmaError::InvalidDate {
        input: input.to_string(),
    })
}

/// A position source bound to a validated configuration.
#[derive(Debug, Clone)]
pub struct SignatureEngine<S> {
    source: S,
    config: JanmaConfig,
}

impl<S: PositionSource> SignatureEngine<S> {
    /// Validate `config` and bind it to `source`.
    pub fn new(source: S, config: JanmaConfig) -> Result<Self, JanmaError> {
        config.validate()?;
        Ok(Self { source, config })
    }

    pub fn config(&self) -> &JanmaConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Generate and purify the matrix for `date`.
    pub fn matrix(&self, date: NaiveDate) -> Result<SampleMatrix, JanmaError> {
        let sampling = &self.config.sampling;
        let mut matrix = generate_matrix(&self.source, date, sampling)?;
        purify_matrix(&mut matrix, &sampling.rashi_multipliers);
        Ok(matrix)
    }

    /// Full run: generate, purify, analyse.
    #[instrument(name = "signature", skip_all, fields(%date, %today))]
    pub fn run(&self, date: NaiveDate, today: NaiveDate) -> Result<SignatureReport, JanmaError> {
        let matrix = self.matrix(date)?;
        let report = analyze(
            &matrix,
            &self.config.analysis,
            self.config.sampling.reference,
            date,
            today,
        )?;
        info!(
            samples = report.sample_count,
            kingmaker = report.kingmaker.english_name(),
            yogas = report.yogas.len(),
            "signature complete"
        );
        Ok(report)
    }

    /// Parse `date` then [`run`](Self::run).
    pub fn run_str(&self, date: &str, today: NaiveDate) -> Result<SignatureReport, JanmaError> {
        self.run(parse_birth_date(date)?, today)
    }
}
