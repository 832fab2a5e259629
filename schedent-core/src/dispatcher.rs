// schedent-core/src/dispatcher.rs
//! Runs the entropy engine for every record in parallel.
//!
//! Each record becomes one blocking unit on the tokio runtime. Units own
//! their record and hand it back with its trace, so nothing is shared while
//! they run. Results land in a slot per record index and are only read once
//! every unit has been joined.

use log::{debug, error, info};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinSet;

use crate::errors::SchedentError;
use crate::record::Record;
use crate::report::CpuReport;

/// Dispatches per-record work, optionally capping how many units run at once.
///
/// The cap is the blocking-pool size of the runtime from
/// [`Dispatcher::build_runtime`]; units beyond it queue until a thread frees up.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    max_workers: Option<NonZeroUsize>,
}

impl Dispatcher {
    /// One concurrent unit per record.
    pub fn unbounded() -> Self {
        Self { max_workers: None }
    }

    /// At most `jobs` units run at once. Zero is rejected.
    pub fn bounded(jobs: usize) -> Result<Self, SchedentError> {
        let max_workers = NonZeroUsize::new(jobs).ok_or(SchedentError::InvalidJobs(jobs))?;
        Ok(Self {
            max_workers: Some(max_workers),
        })
    }

    /// Builds from an optional worker limit.
    pub fn with_limit(jobs: Option<usize>) -> Result<Self, SchedentError> {
        match jobs {
            Some(jobs) => Self::bounded(jobs),
            None => Ok(Self::unbounded()),
        }
    }

    pub fn max_workers(&self) -> Option<usize> {
        self.max_workers.map(NonZeroUsize::get)
    }

    /// Creates the runtime the units execute on.
    ///
    /// Failing to create it means no unit can be started, which is fatal.
    pub fn build_runtime(&self) -> Result<Runtime, SchedentError> {
        let mut builder = Builder::new_multi_thread();
        builder.enable_all().thread_name("schedent-worker");
        if let Some(limit) = self.max_workers {
            builder.max_blocking_threads(limit.get());
        }
        builder.build().map_err(SchedentError::Runtime)
    }

    /// Computes a report for every record and waits for all of them.
    ///
    /// Output order matches input order regardless of completion order. If a
    /// unit fails, the remaining units are still joined before the first
    /// failure is returned.
    pub async fn dispatch(&self, records: Vec<Record>) -> Result<Vec<CpuReport>, SchedentError> {
        info!(
            "Dispatching {} record(s), worker limit: {:?}",
            records.len(),
            self.max_workers()
        );
        dispatch_with(records, CpuReport::compute).await
    }
}

/// Runs `work` once per record as a blocking unit and joins every unit.
pub(crate) async fn dispatch_with<F>(
    records: Vec<Record>,
    work: F,
) -> Result<Vec<CpuReport>, SchedentError>
where
    F: Fn(usize, Record) -> CpuReport + Clone + Send + 'static,
{
    let total = records.len();
    let mut units = JoinSet::new();
    let mut cpu_by_task = HashMap::with_capacity(total);

    for (index, record) in records.into_iter().enumerate() {
        let cpu = index + 1;
        let work = work.clone();
        let handle = units.spawn_blocking(move || {
            debug!("CPU {}: computing entropy over {} task(s)", cpu, record.len());
            (index, work(cpu, record))
        });
        cpu_by_task.insert(handle.id(), cpu);
    }

    let mut slots: Vec<Option<CpuReport>> = Vec::with_capacity(total);
    slots.resize_with(total, || None);
    let mut failure = None;

    while let Some(joined) = units.join_next().await {
        match joined {
            Ok((index, report)) => slots[index] = Some(report),
            Err(source) => {
                let cpu = cpu_by_task.get(&source.id()).copied().unwrap_or(0);
                error!("CPU {}: worker did not complete: {}", cpu, source);
                if failure.is_none() {
                    failure = Some(SchedentError::Worker { cpu, source });
                }
            }
        }
    }

    if let Some(err) = failure {
        return Err(err);
    }

    info!("All {} worker(s) joined", total);
    Ok(slots.into_iter().flatten().collect())
}
