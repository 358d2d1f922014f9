//! Composite solver: tries solvers in order, first answer wins.

use answer_core::{Answer, Result, Solver};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Chain of solvers. Errors from any solver propagate immediately.
#[derive(Clone, Default)]
pub struct CompositeSolver {
    solvers: Vec<Arc<dyn Solver>>,
}

impl CompositeSolver {
    /// Creates an empty composite (never answers).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a solver (tried after the ones already added).
    pub fn add_solver(mut self, solver: Arc<dyn Solver>) -> Self {
        self.solvers.push(solver);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

#[async_trait]
impl Solver for CompositeSolver {
    async fn solve(&self, text: &str) -> Result<Option<Answer>> {
        for (index, solver) in self.solvers.iter().enumerate() {
            if let Some(answer) = solver.solve(text).await? {
                debug!(solver = index, "solver answered");
                return Ok(Some(answer));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use answer_core::AnswerError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed {
        answer: Option<&'static str>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Solver for Fixed {
        async fn solve(&self, _text: &str) -> Result<Option<Answer>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer.map(Answer::new))
        }
    }

    struct Broken;

    #[async_trait]
    impl Solver for Broken {
        async fn solve(&self, _text: &str) -> Result<Option<Answer>> {
            Err(AnswerError::Solver("broken".to_string()))
        }
    }

    #[tokio::test]
    async fn test_first_answer_wins() {
        let calls = Arc::new(AtomicUsize::new(0));
        let composite = CompositeSolver::new()
            .add_solver(Arc::new(Fixed { answer: None, calls: calls.clone() }))
            .add_solver(Arc::new(Fixed { answer: Some("a"), calls: calls.clone() }))
            .add_solver(Arc::new(Fixed { answer: Some("b"), calls: calls.clone() }));

        let answer = composite.solve("x").await.unwrap().unwrap();

        assert_eq!(answer.text, "a");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_composite_never_answers() {
        let composite = CompositeSolver::new();
        assert!(composite.is_empty());
        assert!(composite.solve("2+2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let calls = Arc::new(AtomicUsize::new(0));
        let composite = CompositeSolver::new()
            .add_solver(Arc::new(Broken))
            .add_solver(Arc::new(Fixed { answer: Some("a"), calls: calls.clone() }));

        assert!(composite.solve("x").await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
