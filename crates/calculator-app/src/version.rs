//! Build/version helpers.

const SHORT_HASH_LEN: usize = 7;

/// Returns the version shown in the display tooltip: `pkg_version (short_hash)`.
///
/// The git hash is abbreviated; without git metadata it reads `unknown`.
#[must_use]
pub fn build_version() -> String {
    format_version(env!("CARGO_PKG_VERSION"), option_env!("VERGEN_GIT_SHA"))
}

fn format_version(pkg_version: &str, git_sha: Option<&str>) -> String {
    let git_hash = git_sha.map_or("unknown", |sha| sha.get(..SHORT_HASH_LEN).unwrap_or(sha));
    format!("{pkg_version} ({git_hash})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_version_starts_with_package_version() {
        assert!(build_version().starts_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn git_hash_is_abbreviated() {
        assert_eq!(
            format_version("0.1.0", Some("0123456789abcdef")),
            "0.1.0 (0123456)"
        );
        assert_eq!(format_version("0.1.0", Some("abc")), "0.1.0 (abc)");
        assert_eq!(format_version("0.1.0", None), "0.1.0 (unknown)");
    }
}
