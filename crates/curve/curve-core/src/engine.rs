//! Prediction engine over a table of fitted power-law curves
//!
//! The engine is built once from named columns: every target metric present
//! in the data is fitted against the independent (load) column and stored in
//! a [`CoefficientTable`]. After that the table is only read.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::regression::PowerLawFitter;
use crate::{metric_key, CoefficientTable, CurveError, CurveFitter, FitReport, Result};

/// What happened to each target during [`PredictionEngine::build`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    /// Targets that were fitted, in target order, keyed by table key
    pub fitted: Vec<(String, FitReport)>,
    /// Targets with no column in the source data
    pub skipped: Vec<String>,
    /// Targets whose fit failed
    pub failed: Vec<(String, CurveError)>,
}

impl BuildReport {
    /// Total number of samples dropped by the positivity mask
    pub fn excluded_samples(&self) -> usize {
        self.fitted.iter().map(|(_, report)| report.excluded).sum()
    }
}

/// Evaluates fitted curves for arbitrary loads
#[derive(Debug, Clone, Default)]
pub struct PredictionEngine {
    table: CoefficientTable,
}

impl PredictionEngine {
    /// Wrap an existing coefficient table
    pub fn new(table: CoefficientTable) -> Self {
        Self { table }
    }

    /// Fit every target in `targets` against `independent` with [`PowerLawFitter`]
    ///
    /// Targets absent from `columns` and targets whose fit fails are left
    /// out of the table and listed in the returned [`BuildReport`]. Targets
    /// that normalize to an already listed key are ignored.
    ///
    /// # Errors
    ///
    /// - [`CurveError::MissingColumn`] if `independent` is not a column
    /// - [`CurveError::EmptyTable`] if no target could be fitted
    pub fn build<S: AsRef<str> + Sync>(
        columns: &HashMap<String, Vec<f64>>,
        independent: &str,
        targets: &[S],
    ) -> Result<(Self, BuildReport)> {
        Self::build_with(&PowerLawFitter::new(), columns, independent, targets)
    }

    /// Same as [`build`](Self::build) with a caller-supplied fitter
    pub fn build_with<F, S>(
        fitter: &F,
        columns: &HashMap<String, Vec<f64>>,
        independent: &str,
        targets: &[S],
    ) -> Result<(Self, BuildReport)>
    where
        F: CurveFitter + Sync,
        S: AsRef<str> + Sync,
    {
        let x = columns
            .get(independent)
            .ok_or_else(|| CurveError::MissingColumn(independent.to_string()))?;

        let mut seen = HashSet::new();
        let targets: Vec<&str> = targets
            .iter()
            .map(AsRef::as_ref)
            .filter(|&name| {
                let first = seen.insert(metric_key(name));
                if !first {
                    debug!(metric = name, "duplicate target ignored");
                }
                first
            })
            .collect();

        let fit_one = |name: &str| -> Option<(String, Result<FitReport>)> {
            columns
                .get(name)
                .map(|y| (name.to_string(), fitter.fit_report(x, y)))
        };

        #[cfg(feature = "parallel")]
        let outcomes: Vec<_> = targets.par_iter().map(|&t| fit_one(t)).collect();
        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<_> = targets.iter().map(|&t| fit_one(t)).collect();

        let mut table = CoefficientTable::new();
        let mut report = BuildReport::default();

        for (target, outcome) in targets.into_iter().zip(outcomes) {
            match outcome {
                None => {
                    warn!(metric = target, "no such column, skipping");
                    report.skipped.push(target.to_string());
                }
                Some((name, Ok(fit))) => {
                    if fit.excluded > 0 {
                        info!(
                            metric = %name,
                            excluded = fit.excluded,
                            used = fit.used,
                            "dropped non-positive samples"
                        );
                    }
                    table.insert(&name, fit.result);
                    report.fitted.push((metric_key(&name), fit));
                }
                Some((name, Err(e))) => {
                    warn!(metric = %name, error = %e, "fit failed, skipping");
                    report.failed.push((name, e));
                }
            }
        }

        if table.is_empty() {
            return Err(CurveError::EmptyTable);
        }

        info!(
            fitted = table.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "coefficient table built"
        );
        Ok((Self { table }, report))
    }

    /// The coefficient table backing this engine
    pub fn table(&self) -> &CoefficientTable {
        &self.table
    }

    /// Evaluate one metric at `x`
    pub fn evaluate(&self, metric: &str, x: f64) -> Result<f64> {
        evaluate(&self.table, metric, x)
    }

    /// Evaluate every listed metric at `x`, see [`evaluate_all`]
    pub fn evaluate_all<S: AsRef<str>>(&self, metrics: &[S], x: f64) -> Vec<(String, f64)> {
        evaluate_all(&self.table, metrics, x)
    }
}

/// Evaluate `a * x^b` for one metric of `table`
///
/// # Errors
///
/// - [`CurveError::UnknownMetric`] if the metric was never fitted
/// - [`CurveError::Domain`] for `x = 0` with a negative exponent
pub fn evaluate(table: &CoefficientTable, metric: &str, x: f64) -> Result<f64> {
    table
        .get(metric)
        .ok_or_else(|| CurveError::UnknownMetric(metric_key(metric)))?
        .at(x)
}

/// Evaluate every metric in `metrics` at `x`, keeping the caller's order
///
/// Metrics missing from the table are skipped silently. Metrics whose curve
/// is undefined at `x` are skipped with a warning.
pub fn evaluate_all<S: AsRef<str>>(
    table: &CoefficientTable,
    metrics: &[S],
    x: f64,
) -> Vec<(String, f64)> {
    metrics
        .iter()
        .filter_map(|metric| {
            let key = metric_key(metric.as_ref());
            let fit = table.get(&key)?;
            match fit.at(x) {
                Ok(value) => Some((key, value)),
                Err(e) => {
                    warn!(metric = %key, error = %e, "cannot evaluate");
                    None
                }
            }
        })
        .collect()
}
