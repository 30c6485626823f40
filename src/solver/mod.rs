mod candidate;
pub mod constants;
mod dedup;
mod driver;
mod space;

pub use candidate::{Candidate, EvaluationOrder, Topology};
pub use dedup::SolutionSet;
pub use driver::{SearchReport, SearchStats, Solution, Solutions, Solver, SolverConfig};
pub use space::CandidateSpace;
