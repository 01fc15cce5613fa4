//! Version map files and their discovery
//!
//! Version maps live in JSON files named `.instantiator.json` or
//! `instantiator.json`, found by walking up from the current directory.

pub mod file;
pub mod locate;

pub use file::VersionMapFile;
pub use locate::{CONFIG_FILE_NAMES, find_config_file, locate_config, open_version_map};
