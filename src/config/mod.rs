//! Reading machine descriptions and settings lines.
//!
//! Descriptions come either in the plain text format handled by
//! [`parse_config`] or as JSON decoded into [`MachineSpec`]. Both end in
//! [`MachineSpec::build`], which goes through the builders, so every
//! format is validated the same way.

mod error;
mod parser;
mod settings;
mod spec;

pub use error::ParseError;
pub use parser::{load_config, parse_config};
pub use settings::SettingLine;
pub use spec::{MachineSpec, RotorSpec, RotorSpecKind};
