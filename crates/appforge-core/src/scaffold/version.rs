//! Version comparison between the CLI and a boilerplate

use semver::Version;

/// Compare the CLI version against the minimum version a boilerplate expects.
/// Returns a warning message when the CLI is older; unparseable versions are
/// skipped silently rather than failing the scaffold.
pub fn check_compatibility(
    cli_version: &str,
    boilerplate_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli = Version::parse(cli_version).ok()?;
    let wanted = Version::parse(boilerplate_version).ok()?;

    if cli < wanted {
        Some(format!(
            "This boilerplate expects CLI version {} or newer, you are running {}. \
             Consider updating: {}",
            wanted, cli, upgrade_command
        ))
    } else {
        None
    }
}
