/// Version label used when the build was not stamped with `RELOG_VERSION`.
pub const FALLBACK_VERSION: &str = "v0.4.0";

/// Build-time configuration for the current release.
///
/// Constructed once at the binary's edge and passed into the catalog,
/// rather than read ad hoc where the values are consumed. The deployment
/// step stamps both values into the environment of the compiler:
///
/// ```sh
/// RELOG_VERSION=v0.4.0 RELOG_BUILD_TIME="2026-08-04 10:00:00" cargo build
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuildInfo {
    version: Option<String>,
    build_time: Option<String>,
}

impl BuildInfo {
    /// Create build info from explicit values (used by tests and embedders)
    pub fn new(version: Option<String>, build_time: Option<String>) -> Self {
        Self {
            version,
            build_time,
        }
    }

    /// Read the values stamped into this binary at compile time
    pub fn from_build_env() -> Self {
        Self {
            version: option_env!("RELOG_VERSION").map(str::to_string),
            build_time: option_env!("RELOG_BUILD_TIME").map(str::to_string),
        }
    }

    /// Version label for the current release, falling back to the
    /// hardcoded literal when the build was not stamped
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(FALLBACK_VERSION)
    }

    /// Date portion of the build timestamp (`"YYYY-MM-DD HH:MM:SS"` is
    /// truncated at the first whitespace). Absent or blank timestamps
    /// yield `None` and the date is simply not shown.
    pub fn build_date(&self) -> Option<&str> {
        self.build_time.as_deref()?.split_whitespace().next()
    }
}
