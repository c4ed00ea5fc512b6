//! URL helper functions

use crate::config::SiteConfig;

/// Directory whose contents are served at the site root
pub const PUBLIC_PREFIX: &str = "public/";

/// Turn an authored asset path into a runtime asset URL
///
/// # Examples
/// ```
/// use mortorq_site::helpers::asset_path;
/// assert_eq!(asset_path("public/media/logo.png"), "media/logo.png");
/// assert_eq!(asset_path("/media/logo.png"), "/media/logo.png");
/// ```
pub fn asset_path(path: &str) -> String {
    path.strip_prefix(PUBLIC_PREFIX).unwrap_or(path).to_string()
}

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog/kickoff") // -> "/blog/kickoff"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about") // -> "https://team1515.com/about"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://team1515.com/".to_string(),
            root: "/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_asset_path() {
        assert_eq!(asset_path("public/media/a.jpg"), "media/a.jpg");
        assert_eq!(asset_path("media/a.jpg"), "media/a.jpg");
        assert_eq!(asset_path("media/public/a.jpg"), "media/public/a.jpg");
        assert_eq!(asset_path(""), "");
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/"), "/");
        assert_eq!(url_for(&config, "about"), "/about");

        let nested = SiteConfig {
            root: "/site/".to_string(),
            ..test_config()
        };
        assert_eq!(url_for(&nested, "/blog/kickoff"), "/site/blog/kickoff");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(full_url_for(&config, "/"), "https://team1515.com/");
        assert_eq!(
            full_url_for(&config, "/sponsors"),
            "https://team1515.com/sponsors"
        );
    }
}
