//! Paper server builds offered for each supported game version.

/// Version used when none is given and for unknown versions.
pub const DEFAULT_SERVER_VERSION: &str = "1.20.1";

/// Supported versions with their pinned Paper build download URLs.
pub const SUPPORTED_VERSIONS: [(&str, &str); 5] = [
    (
        "1.20.1",
        "https://api.papermc.io/v2/projects/paper/versions/1.20.1/builds/196/downloads/paper-1.20.1-196.jar",
    ),
    (
        "1.19.4",
        "https://api.papermc.io/v2/projects/paper/versions/1.19.4/builds/550/downloads/paper-1.19.4-550.jar",
    ),
    (
        "1.18.2",
        "https://api.papermc.io/v2/projects/paper/versions/1.18.2/builds/388/downloads/paper-1.18.2-388.jar",
    ),
    (
        "1.16.5",
        "https://api.papermc.io/v2/projects/paper/versions/1.16.5/builds/794/downloads/paper-1.16.5-794.jar",
    ),
    (
        "1.12.2",
        "https://api.papermc.io/v2/projects/paper/versions/1.12.2/builds/1620/downloads/paper-1.12.2-1620.jar",
    ),
];

/// Download URL of the Paper jar for `version`, falling back to the default version.
pub fn paper_download_url(version: &str) -> &'static str {
    // First entry is DEFAULT_SERVER_VERSION.
    let (_, url) = SUPPORTED_VERSIONS
        .iter()
        .find(|(v, _)| *v == version)
        .unwrap_or(&SUPPORTED_VERSIONS[0]);
    url
}
