//! Pointer concepts, one printed block per demo: references as pointers,
//! rebinding vs. mutation, two ways to heap-allocate a record, offset
//! arithmetic, and a catalogue of misuse that is only ever printed.

pub mod arithmetic;
pub mod basics;
pub mod error;
pub mod hazards;
pub mod runner;
pub mod student;

pub use error::{DemoError, Result};
pub use runner::{run_all, Demo, DEMOS};
