//! Tree-rewriting passes invoked by the engine policies.

mod inherit;
mod propagate;

pub use inherit::{inherit, inherit_exclusive};
pub use propagate::{copy_directives, copy_hook_directives};
