// schedent-core/src/report.rs
//! Renders per-CPU scheduling and entropy results.

use std::io::{self, Write};

use crate::record::{EntropyTrace, Record};

/// Formats one entropy value fixed to two decimals.
///
/// Cancellation in the recurrence can leave tiny negative values where the
/// true entropy is zero (`A 5 A 5` yields about `-4.4e-16` on its second
/// step). Two requirements pull apart here: negative artifacts are accepted
/// and must not be masked, yet a single repeated label must print `0.00` at
/// every step. The printed form follows the second: anything that would
/// render as `-0.00` prints as `0.00`, which differs from plain fixed-point
/// output. The trace itself keeps the raw value, and every other negative
/// prints unchanged.
pub fn format_entropy(value: f64) -> String {
    let text = format!("{:.2}", value);
    if text == "-0.00" {
        String::from("0.00")
    } else {
        text
    }
}

/// A record paired with its computed trace, tagged with its 1-based CPU number.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuReport {
    pub cpu: usize,
    pub record: Record,
    pub trace: EntropyTrace,
}

impl CpuReport {
    pub fn new(cpu: usize, record: Record, trace: EntropyTrace) -> Self {
        Self { cpu, record, trace }
    }

    /// Computes the trace in place. Used where no dispatcher is involved.
    pub fn compute(cpu: usize, record: Record) -> Self {
        let trace = record.entropy_trace();
        Self::new(cpu, record, trace)
    }

    /// The task list as `label(duration)` entries joined by `, `.
    pub fn task_summary(&self) -> String {
        self.record
            .tasks()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Writes the four-line block for this CPU.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "CPU {}", self.cpu)?;
        writeln!(writer, "Task scheduling information: {}", self.task_summary())?;
        writeln!(writer, "Entropy for CPU {}", self.cpu)?;
        for value in self.trace.values() {
            write!(writer, "{} ", format_entropy(*value))?;
        }
        writeln!(writer)
    }
}

/// Writes every report, in the order given.
pub fn write_report<W: Write>(reports: &[CpuReport], writer: &mut W) -> io::Result<()> {
    for report in reports {
        report.write_to(writer)?;
    }
    writer.flush()
}
