//! Shader stages and the linked program.
//!
//! Stages are checked on the CPU with naga before they reach the device, so
//! compile problems surface as logged diagnostics instead of device errors.
//! Link problems are caught in a device error scope.

mod check;
mod program;
mod source;

pub use check::{check, check_program, Diagnostic, Diagnostics, ProgramCheck, Severity};
pub use program::Program;
pub use source::{StageKind, StageSource};
