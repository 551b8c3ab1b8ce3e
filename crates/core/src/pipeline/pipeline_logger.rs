use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting logger for pipeline orchestration events.
///
/// Decouples the use case from specific output mechanisms (stdout, log
/// crate, test capture) so each caller can observe a run without
/// changing the orchestration code.
pub trait PipelineLogger: Send {
    /// Report segment-level progress.
    fn progress(&mut self, current: usize, total: usize);

    /// Record how long a named pipeline stage took for one segment.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
///
/// Used in quiet mode and by tests where logger output is irrelevant.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger that reports per-segment progress through the log
/// crate and accumulates per-stage timings for a completion summary.
///
/// Segment counts are small (one per ten seconds of audio), so progress
/// is reported on every segment rather than throttled.
pub struct StdoutPipelineLogger {
    timings: HashMap<String, Vec<f64>>,
    start_time: Instant,
    total_segments: usize,
    messages: Vec<String>,
}

impl StdoutPipelineLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            start_time: Instant::now(),
            total_segments: 0,
            messages: Vec::new(),
        }
    }

    /// Returns the formatted summary string, or `None` if no data recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let segments = self.total_segments;
        let mut lines = Vec::new();

        lines.push(format!(
            "Analysis summary ({segments} segments, {:.1}s total):",
            elapsed_ms / 1000.0
        ));

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let durations = &self.timings[stage];
            let total_ms: f64 = durations.iter().sum();
            let avg_ms = if durations.is_empty() {
                0.0
            } else {
                total_ms / durations.len() as f64
            };
            lines.push(format!(
                "  {stage:12}: avg {avg_ms:6.1}ms  total {total_ms:7.0}ms"
            ));
        }

        if segments > 0 && elapsed_ms > 0.0 {
            let rate = segments as f64 / (elapsed_ms / 1000.0);
            lines.push(format!("  Throughput: {rate:.2} segments/s"));
        }

        Some(lines.join("\n"))
    }

    /// Returns the timing data for a given stage.
    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        self.total_segments = total;
        if total > 0 {
            log::info!("Analyzing segment {current}/{total}");
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
