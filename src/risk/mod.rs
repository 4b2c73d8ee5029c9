//! Risk evaluation and safety comparison.
//!
//! Two pure functions over the catalog's risk profiles:
//! 1. [`evaluate`] classifies one medicine against the user's selected
//!    conditions as SAFE / CAUTION / AVOID.
//! 2. [`compare`] derives the relative-safety judgment between two verdicts.

mod compare;
mod evaluate;
mod messages;
mod types;

pub use compare::*;
pub use evaluate::*;
pub use messages::*;
pub use types::*;
