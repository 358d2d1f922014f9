//! Solver factory: builds the process-wide solver and normalizer from a [`SolverContext`].

use crate::arithmetic::ArithmeticSolver;
use crate::composite::CompositeSolver;
use crate::link::LinkSolver;
use crate::normalize::UrlNormalizer;
use answer_core::{AnswerError, Normalizer, Solver};
use anyhow::Result;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, instrument};

/// A solver that can be enabled through SOLVERS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    Arithmetic,
    Link,
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::Arithmetic => f.write_str("arithmetic"),
            SolverKind::Link => f.write_str("link"),
        }
    }
}

impl FromStr for SolverKind {
    type Err = AnswerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arithmetic" | "math" => Ok(SolverKind::Arithmetic),
            "link" | "url" => Ok(SolverKind::Link),
            other => Err(AnswerError::Config(format!("unknown solver '{}'", other))),
        }
    }
}

/// Shared construction context for the solver: which solvers are enabled, in the order they are tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverContext {
    pub solvers: Vec<SolverKind>,
}

impl Default for SolverContext {
    fn default() -> Self {
        Self {
            solvers: vec![SolverKind::Arithmetic, SolverKind::Link],
        }
    }
}

impl SolverContext {
    /// Load from SOLVERS (comma-separated, e.g. `arithmetic,link`); unset means the default set.
    pub fn from_env() -> Result<Self> {
        match env::var("SOLVERS") {
            Ok(list) => Self::parse(&list),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parses a comma-separated solver list. Empty entries are skipped; duplicates are kept once.
    pub fn parse(list: &str) -> Result<Self> {
        let mut solvers = Vec::new();
        for name in list.split(',').filter(|s| !s.trim().is_empty()) {
            let kind: SolverKind = name.parse()?;
            if !solvers.contains(&kind) {
                solvers.push(kind);
            }
        }
        if solvers.is_empty() {
            anyhow::bail!("SOLVERS is set but names no solver");
        }
        Ok(Self { solvers })
    }
}

/// Builds the solver shared by every update for the process lifetime.
#[instrument(skip(context))]
pub fn create_solver(context: &SolverContext) -> Arc<dyn Solver> {
    let mut composite = CompositeSolver::new();
    for kind in &context.solvers {
        let solver: Arc<dyn Solver> = match kind {
            SolverKind::Arithmetic => Arc::new(ArithmeticSolver::new()),
            SolverKind::Link => Arc::new(LinkSolver::new()),
        };
        composite = composite.add_solver(solver);
    }
    let names: Vec<String> = context.solvers.iter().map(|k| k.to_string()).collect();
    info!(solvers = %names.join(","), "Solver created");
    Arc::new(composite)
}

/// Builds the normalizer applied before solving.
pub fn create_normalizer() -> Arc<dyn Normalizer> {
    Arc::new(UrlNormalizer::new())
}
