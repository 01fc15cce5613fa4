use instantiator_core::Selection;
use crate::config::VersionMapFile;

/// Render `identifier@version`, or just the identifier without a version
pub fn format_request(identifier: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => format!("{identifier}@{version}"),
        None => identifier.to_string(),
    }
}

/// Describe a selection outcome in one line
pub fn describe_selection(identifier: &str, version: Option<&str>, selection: &Selection) -> String {
    let request = format_request(identifier, version);
    match selection {
        Selection::Class(target) if target == identifier => {
            format!("{request} → {target} (unchanged)")
        }
        Selection::Class(target) => format!("{request} → {target}"),
        Selection::Instance(_) => format!("{request} → pinned instance"),
        Selection::Veto => format!("{request} → vetoed (resolves to nothing)"),
    }
}

/// One line per class/version entry, sorted by class then version
pub fn redirect_lines(config: &VersionMapFile) -> Vec<String> {
    config
        .classes
        .iter()
        .flat_map(|(class, versions)| {
            versions.iter().map(move |(version, target)| match target {
                Some(target) => format!("{class}@{version} → {target}"),
                None => format!("{class}@{version} → vetoed"),
            })
        })
        .collect()
}
