//! Time-travel navigation over a finished trace

use super::{Step, StepTrace};
use crate::errors::{Result, TraceError};

/// A frozen [`StepTrace`] plus the step currently being shown
#[derive(Debug, Clone)]
pub struct Replay {
    trace: StepTrace,
    position: usize,
}

impl Replay {
    pub fn new(trace: StepTrace) -> Self {
        Replay { trace, position: 0 }
    }

    pub fn trace(&self) -> &StepTrace {
        &self.trace
    }

    /// The step at the current position (`None` only for an empty trace)
    pub fn current(&self) -> Option<&Step> {
        self.trace.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    pub fn step_forward(&mut self) -> Result<()> {
        if self.is_at_end() {
            return Err(TraceError::HistoryOperationFailed {
                message: "Already at the last step".to_string(),
            });
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<()> {
        if self.is_at_start() {
            return Err(TraceError::HistoryOperationFailed {
                message: "Already at the first step".to_string(),
            });
        }
        self.position -= 1;
        Ok(())
    }

    /// Step forward up to `n` times, returning how many steps were taken
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        let mut stepped = 0;
        while stepped < n && self.step_forward().is_ok() {
            stepped += 1;
        }
        stepped
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.trace.len().saturating_sub(1);
    }

    pub fn into_trace(self) -> StepTrace {
        self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{Algorithm, Step};

    fn three_steps() -> Replay {
        Replay::new(StepTrace::from_steps(
            Algorithm::Insertion,
            [
                Step::sort(&[2, 1], vec![], vec![]),
                Step::sort(&[2, 1], vec![0, 1], vec![]),
                Step::sort(&[1, 2], vec![], vec![0, 1]),
            ],
        ))
    }

    #[test]
    fn test_step_forward_and_backward() {
        let mut replay = three_steps();
        assert!(replay.is_at_start());
        assert!(replay.step_backward().is_err());

        replay.step_forward().unwrap();
        assert_eq!(replay.current().map(Step::comparing), Some(&[0, 1][..]));

        replay.step_forward().unwrap();
        assert!(replay.is_at_end());
        let err = replay.step_forward().unwrap_err();
        assert!(matches!(err, TraceError::HistoryOperationFailed { .. }));
        assert_eq!(replay.position(), 2);
    }

    #[test]
    fn test_jumps() {
        let mut replay = three_steps();
        replay.jump_to_end();
        assert_eq!(replay.position(), 2);
        replay.rewind_to_start();
        assert_eq!(replay.position(), 0);
        assert_eq!(replay.step_forward_by(9), 2);
    }

    #[test]
    fn test_empty_trace() {
        let mut replay = Replay::new(StepTrace::from_steps(Algorithm::Bfs, []));
        assert!(replay.current().is_none());
        assert!(replay.is_at_end());
        replay.jump_to_end();
        assert_eq!(replay.position(), 0);
    }
}
