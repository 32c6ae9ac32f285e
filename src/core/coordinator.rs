//! Run coordinator - drives a single anonymization run
//!
//! The coordinator owns the dataset for the whole run: it is loaded once,
//! rewritten in place and written once. Any failure ends the run; nothing is
//! retried and no partial output is left behind.

use crate::adapters::csv_io::{read_dataset, write_dataset};
use crate::anonymization::audit::AuditLogger;
use crate::anonymization::{AnonymizationEngine, RunSummary};
use crate::config::CloakConfig;
use crate::domain::errors::CloakError;
use crate::domain::Result;
use crate::{log_error_with_context, log_run_complete, log_run_start};
use std::time::Instant;

/// Run coordinator
pub struct Coordinator {
    config: CloakConfig,
    engine: AnonymizationEngine,
    audit_logger: Option<AuditLogger>,
}

impl Coordinator {
    /// Create a coordinator for a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`CloakError::Configuration`] if the configuration is invalid
    /// or the audit log directory cannot be created.
    pub fn new(config: CloakConfig) -> Result<Self> {
        config.validate().map_err(|e| {
            CloakError::Configuration(format!("Configuration validation failed: {e}"))
        })?;

        let engine = AnonymizationEngine::new(&config.anonymization)?;

        let audit_logger = if config.audit.enabled {
            Some(
                AuditLogger::new(config.audit.log_path.clone(), config.audit.json_format)
                    .map_err(|e| CloakError::Configuration(format!("{e:#}")))?,
            )
        } else {
            None
        };

        Ok(Self {
            config,
            engine,
            audit_logger,
        })
    }

    /// The configuration this coordinator runs with
    pub fn config(&self) -> &CloakConfig {
        &self.config
    }

    /// Execute the run
    ///
    /// 1. Loads the dataset from `anonymization.input_path`
    /// 2. Rewrites the target columns
    /// 3. Writes `anonymization.output_path` unless `application.dry_run` is set
    /// 4. Appends an audit record if enabled; a failed append is logged as a
    ///    warning and does not fail the run
    pub fn execute(&self) -> Result<RunSummary> {
        let start_time = Instant::now();
        let anon = &self.config.anonymization;
        let mut summary = RunSummary::new(
            anon.input_path.clone(),
            anon.output_path.clone(),
            self.config.application.dry_run,
        );

        let span = tracing::info_span!("run", run_id = %summary.run_id);
        let _entered = span.enter();

        log_run_start!(anon.input_path.display(), anon.output_path.display());

        if let Err(e) = self.process(&mut summary) {
            log_error_with_context!(&e, "Anonymization run failed");
            return Err(e);
        }

        summary.duration_ms = start_time.elapsed().as_millis() as u64;

        // The output is already in place, so a failed append does not fail the run
        if let Some(ref logger) = self.audit_logger {
            if let Err(e) = logger.log_run(&summary) {
                tracing::warn!(
                    error = %format!("{e:#}"),
                    audit_log = %logger.log_path().display(),
                    "Failed to append audit record"
                );
            }
        }

        log_run_complete!(summary.rows, summary.total_hashed(), start_time.elapsed());

        Ok(summary)
    }

    fn process(&self, summary: &mut RunSummary) -> Result<()> {
        let anon = &self.config.anonymization;

        let mut dataset = read_dataset(&anon.input_path)?;
        summary.rows = dataset.len();
        summary.columns = dataset.width();

        tracing::info!(
            rows = summary.rows,
            columns = summary.columns,
            target_columns = ?self.engine.target_columns(),
            missing_value = %self.engine.missing_value(),
            "Dataset loaded"
        );

        summary.column_stats = self.engine.anonymize_dataset(&mut dataset)?;

        if summary.dry_run {
            tracing::info!(
                output_path = %anon.output_path.display(),
                "Dry run: output file not written"
            );
        } else {
            write_dataset(&dataset, &anon.output_path)?;
        }

        Ok(())
    }
}

/// Load, transform and save using `config`
///
/// Convenience wrapper around [`Coordinator::new`] and [`Coordinator::execute`].
pub fn run(config: CloakConfig) -> Result<RunSummary> {
    Coordinator::new(config)?.execute()
}
