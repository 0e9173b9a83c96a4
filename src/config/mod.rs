//! Optional preset file for deployment parameters.
//!
//! A preset is a YAML file naming any subset of the seven fields. Fields it
//! supplies are not prompted for. Unknown keys are ignored so one file can be
//! shared with other tooling.

mod model;
mod operations;


pub use model::Preset;
