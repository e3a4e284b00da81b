//! Battle mechanics: drawing, comparing, and the round state machine.
//!
//! ## Key Types
//!
//! - `compare` / `ComparisonResult` / `Winner`: pure head-to-head
//!   comparison on one attribute
//! - `draw`: uniform card and attribute selection
//! - `Round` / `RoundPhase`: the per-round state machine that ties the
//!   catalog, RNG, comparator, and progression store together

pub mod compare;
pub mod draw;
pub mod round;

pub use compare::{compare, ComparisonResult, Winner};
pub use draw::{pick_random_attribute, pick_random_card};
pub use round::{Round, RoundPhase};
