//! Utils module split into submodules

mod errors;
mod permutations;
mod validation;

pub use errors::UtilsError;
pub use permutations::index_permutations;
pub use validation::validate_operands;
