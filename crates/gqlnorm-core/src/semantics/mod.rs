//! The engine policies, one per normalization target.

mod dgraph;
mod gqlgen;

pub use dgraph::DgraphSemantics;
pub use gqlgen::GqlgenSemantics;
