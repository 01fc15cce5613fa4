use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::config::{VersionMapFile, locate_config, open_version_map};
use crate::display::redirect_lines;

pub fn check_command(path: Option<&Path>, json: bool) -> Result<()> {
    let config_path = locate_config(path)?;
    debug!("Checking version map at {}", config_path.display());

    let config = open_version_map(&config_path)?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&config).context("Failed to render version map")?;
        println!("{rendered}");
        return Ok(());
    }

    println!("✅ Valid version map: {}", config_path.display());
    match &config.default_version {
        Some(version) => println!("   • Default version: {version}"),
        None => println!("   • Default version: none"),
    }
    println!("   • Classes: {}", config.classes.len());

    for line in redirect_lines(&config) {
        println!("     {line}");
    }

    for warning in chained_redirects(&config) {
        println!("⚠️  {warning}");
    }

    Ok(())
}

/// Redirects whose target is itself a mapped class
///
/// Selection is applied once per resolution, so these chains stop after the
/// first hop.
pub fn chained_redirects(config: &VersionMapFile) -> Vec<String> {
    let mut warnings = Vec::new();
    for (class, versions) in &config.classes {
        for (version, target) in versions {
            let Some(target) = target else { continue };
            if target != class && config.classes.contains_key(target) {
                warnings.push(format!(
                    "{class}@{version} redirects to {target}, which has its own versions; only one redirect is applied"
                ));
            }
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use instantiator_core::VersionMap;

    #[test]
    fn test_chained_redirects_are_reported() {
        let map = VersionMap::new()
            .redirect("Greeter", "v2", "GreeterV2")
            .redirect("GreeterV2", "beta", "GreeterV3")
            .redirect("Mailer", "v1", "Mailer");

        let warnings = chained_redirects(&VersionMapFile::from(&map));

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Greeter@v2 redirects to GreeterV2"));
    }
}
