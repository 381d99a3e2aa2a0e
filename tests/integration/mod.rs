//! Integration tests for the cylinder maze generator

mod determinism;
mod errors;
mod invariants;
mod test_utils;
