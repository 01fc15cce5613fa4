use anyhow::Result;
use instantiator_core::VersionMap;
use std::path::Path;
use tracing::debug;

use crate::config::{locate_config, open_version_map};
use crate::display::describe_selection;

pub fn select_command(identifier: &str, version: Option<&str>, config: Option<&Path>) -> Result<()> {
    let map = match config {
        Some(_) => open_version_map(&locate_config(config)?)?.to_version_map(),
        None => match locate_config(None) {
            Ok(path) => open_version_map(&path)?.to_version_map(),
            Err(e) => {
                debug!("No version map found ({e:#}), every request passes through");
                VersionMap::new()
            }
        },
    };

    let effective = map.effective_version(version);
    if effective != version {
        debug!("Using default version {:?}", effective);
    }

    let selection = map.lookup(identifier, version);
    println!("{}", describe_selection(identifier, effective, &selection));

    Ok(())
}
