//! In-place text patching of generated documentation data.

mod scayt;

pub use scayt::{ReplacementMap, SubstitutionReport, apply_replacements, load_replacement_map};
