//! Strongly connected components and 2-SAT.
//!
//! - [`graph`]: Tarjan's SCC engine ([`graph::scc`]).
//! - [`algo`]: 2-SAT by reduction to an implication graph
//!   ([`algo::twosat`]).
//! - [`naive`]: slow reference implementations, used as test oracles.

pub use algo;
pub use graph;
pub use naive;
