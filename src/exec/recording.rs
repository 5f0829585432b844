//! In-memory command runner for tests and dry runs

use std::collections::HashSet;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;
use std::sync::Mutex;

use super::{CommandRunner, CommandSpec, ExecError};

/// Records commands instead of running them
///
/// Programs registered with [`RecordingRunner::with_program`] are reported as
/// available; programs registered with [`RecordingRunner::failing`] exit 1.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    available: HashSet<String>,
    failing: HashSet<String>,
    calls: Mutex<Vec<CommandSpec>>,
    detached: Mutex<Vec<CommandSpec>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(mut self, program: &str) -> Self {
        self.available.insert(program.to_string());
        self
    }

    pub fn failing(mut self, program: &str) -> Self {
        self.failing.insert(program.to_string());
        self
    }

    /// Commands passed to `run`, in order
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Commands passed to `spawn_detached`, in order
    pub fn detached(&self) -> Vec<CommandSpec> {
        self.detached.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn outcome(&self, spec: &CommandSpec) -> Result<(), ExecError> {
        if self.failing.contains(&spec.program) {
            Err(ExecError::Failed {
                command: spec.to_string(),
                // wait status for "exited with code 1"
                status: ExitStatus::from_raw(1 << 8),
            })
        } else {
            Ok(())
        }
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<(), ExecError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(spec.clone());
        self.outcome(spec)
    }

    fn spawn_detached(&self, spec: &CommandSpec) -> Result<(), ExecError> {
        self.detached
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(spec.clone());
        self.outcome(spec)
    }

    fn is_available(&self, program: &str) -> bool {
        self.available.contains(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let runner = RecordingRunner::new();
        tokio_test::block_on(runner.run(&CommandSpec::new("a"))).unwrap();
        tokio_test::block_on(runner.run(&CommandSpec::new("b"))).unwrap();

        let programs: Vec<_> = runner.calls().into_iter().map(|c| c.program).collect();
        assert_eq!(programs, vec!["a", "b"]);
        assert!(runner.detached().is_empty());
    }

    #[test]
    fn test_failing_program_still_recorded() {
        let runner = RecordingRunner::new().failing("rpm");
        let err = tokio_test::block_on(runner.run(&CommandSpec::new("rpm"))).unwrap_err();

        assert!(err.to_string().contains("exit status: 1"));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn test_availability() {
        let runner = RecordingRunner::new().with_program("kdialog");
        assert!(runner.is_available("kdialog"));
        assert!(!runner.is_available("notify-send"));
    }
}
