//! Exact rational arithmetic for the search

mod exact;

pub use exact::ExactNumber;

#[cfg(test)]
mod tests;
