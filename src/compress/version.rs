//! Latest UPX version resolution.

use super::client::ReleaseClient;

/// Outcome of querying the release endpoint.
///
/// Only [`VersionResolution::TransportError`] is fatal; `NotFound` is
/// answered by substituting the configured fallback version. A missing or
/// null `tag_name`, like any other undecodable body, is a transport error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VersionResolution {
    /// A bare version such as `4.1.0`.
    Resolved(String),
    /// The endpoint returned a tag that is empty once its prefix is stripped.
    NotFound,
    /// The endpoint could not be reached, answered with a non-success
    /// status, or returned a body without a string `tag_name`.
    TransportError(String),
}

/// Queries `api_url` for the latest UPX release and strips its tag prefix.
pub async fn resolve_version<C: ReleaseClient>(client: &C, api_url: &str) -> VersionResolution {
    match client.latest_release_tag(api_url).await {
        Ok(tag) => {
            log::info!("upx: got latest version {}", tag);
            let version = strip_tag_prefix(&tag);
            if version.is_empty() {
                VersionResolution::NotFound
            } else {
                VersionResolution::Resolved(version.to_string())
            }
        }
        Err(e) => VersionResolution::TransportError(e.to_string()),
    }
}

/// Removes a single leading non-numeric character (`v4.1.0` -> `4.1.0`).
fn strip_tag_prefix(tag: &str) -> &str {
    let tag = tag.trim();
    match tag.chars().next() {
        Some(c) if !c.is_ascii_digit() => &tag[c.len_utf8()..],
        _ => tag,
    }
}

#[cfg(test)]
mod tests {
    use super::strip_tag_prefix;

    #[test]
    fn strips_one_leading_prefix_character() {
        assert_eq!(strip_tag_prefix("v4.1.0"), "4.1.0");
        assert_eq!(strip_tag_prefix("4.1.0"), "4.1.0");
        assert_eq!(strip_tag_prefix("vv1"), "v1");
        assert_eq!(strip_tag_prefix("v"), "");
        assert_eq!(strip_tag_prefix(""), "");
    }
}
