//! A4/A5: live shared-memory telemetry projection and driving-style
//! analysis. Runs on its own polling loop outside the core pipeline; a CLI
//! entry point is what bridges the two.

pub mod reader;
pub mod style;
