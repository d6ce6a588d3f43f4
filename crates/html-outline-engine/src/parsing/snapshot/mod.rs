//! # Snapshot Testing Support
//!
//! Utilities for testing the builder via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a forest to a stable, line-per-item text form
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for builder correctness (indent
//!   monotonicity, leaf-only text items)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
