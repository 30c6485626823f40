//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;
mod operator;

pub use ast::Expression;
pub use errors::Rejection;
pub use operator::Operator;

#[cfg(test)]
mod tests;
