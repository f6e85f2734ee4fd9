use crate::build_info::BuildInfo;

/// One changelog entry: a version label, an optional release date, the
/// pre-authored note body, and whether the section starts expanded.
#[derive(Debug, Clone)]
pub struct Release {
    pub version: String,
    pub date: Option<String>,
    pub notes: &'static str,
    pub default_open: bool,
}

impl Release {
    fn historical(version: &str, date: &str, notes: &'static str) -> Self {
        Self {
            version: version.to_string(),
            date: Some(date.to_string()),
            notes,
            default_open: false,
        }
    }
}

/// Notes for the release this binary was built from
const CURRENT_NOTES: &str = include_str!("../notes/v0.4.0.md");

/// Build the full release list, newest first.
///
/// The current release is synthesized from build metadata and prepended
/// ahead of the hardcoded history. Cutting a release: append an entry
/// for the previous current fields below, then bump `FALLBACK_VERSION`
/// and `CURRENT_NOTES`.
pub fn catalog(build: &BuildInfo) -> Vec<Release> {
    let mut releases = vec![Release {
        version: build.version().to_string(),
        date: build.build_date().map(str::to_string),
        notes: CURRENT_NOTES,
        default_open: true,
    }];

    releases.extend([
        Release::historical("v0.3.1", "2026-01-09", include_str!("../notes/v0.3.1.md")),
        Release::historical("v0.3.0", "2025-12-15", include_str!("../notes/v0.3.0.md")),
        Release::historical("v0.2.0", "2025-10-20", include_str!("../notes/v0.2.0.md")),
        Release::historical("v0.1.0", "2025-09-02", include_str!("../notes/v0.1.0.md")),
    ]);

    releases
}
