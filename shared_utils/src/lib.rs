//! Small helpers shared across the catalog admin workspace.

pub mod env;
