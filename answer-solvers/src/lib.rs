//! # answer-solvers
//!
//! Reference implementations of the pipeline's collaborators: [`UrlNormalizer`], [`ArithmeticSolver`],
//! [`LinkSolver`], [`CompositeSolver`], and the [`create_solver`] factory that assembles them from a
//! [`SolverContext`].

pub mod arithmetic;
pub mod composite;
pub mod factory;
pub mod link;
pub mod normalize;

pub use arithmetic::{evaluate, format_number, ArithmeticSolver};
pub use composite::CompositeSolver;
pub use factory::{create_normalizer, create_solver, SolverContext, SolverKind};
pub use link::LinkSolver;
pub use normalize::{canonical_url, UrlNormalizer};
