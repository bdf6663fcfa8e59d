use std::io::{self, Write};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub duration: Duration,
}

/// Wall-clock time spent in each pipeline step, in execution order.
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `step` and records its duration, whether it succeeds or not.
    pub fn measure<T>(&mut self, name: impl Into<String>, step: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let output = step();
        self.steps.push(StepTiming {
            name: name.into(),
            duration: start.elapsed(),
        });
        output
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Summed duration of every step recorded under `name`.
    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.steps
            .iter()
            .filter(|s| s.name == name)
            .map(|s| s.duration)
            .reduce(|a, b| a + b)
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn write_summary(&self, out: &mut dyn Write) -> io::Result<()> {
        for step in &self.steps {
            writeln!(out, "{:<24} {:>10.3}ms", step.name, step.duration.as_secs_f64() * 1000.0)?;
        }
        writeln!(
            out,
            "{:<24} {:>10.3}ms",
            "total",
            self.total_duration().as_secs_f64() * 1000.0
        )
    }
}
