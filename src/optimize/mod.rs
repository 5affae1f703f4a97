//! One-dimensional minimization and root finding on fixed example functions.

pub mod golden;
pub mod newton;

pub use golden::golden_section_search;
pub use newton::newton_raphson;
