//! loctool - localization migration tools for game content mods
//!
//! Converts flat, English-suffixed keys from a game's localization dump into
//! a structured i18n namespace, rewires the mod's content patch to reference
//! those keys, and sorts JSON translation files for stable diffs.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `json_file`: JSON reading and 4-space pretty writing
//! - `keys`: Raw key to canonical i18n key conversion
//! - `migration`: Dump / content patch / i18n merge
//! - `sort`: Recursive JSON key sorting

pub mod cli;
pub mod config;
pub mod json_file;
pub mod keys;
pub mod migration;
pub mod sort;
