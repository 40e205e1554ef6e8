//! The built-in workshop site configuration

use crate::{SiteConfig, Variable};
use std::sync::LazyLock;

/// Google Analytics (gtag.js) snippet for the workshop site
///
/// Not enabled in [`workshop_config`]. Opt in with
/// [`SiteConfig::with_analytics`] or by setting `analytics` in a config file.
pub const GOOGLE_ANALYTICS: &str = r#"
<!-- Global site tag (gtag.js) - Google Analytics -->
<script async src="https://www.googletagmanager.com/gtag/js?id=UA-135921114-1"></script>
<script>
  window.dataLayer = window.dataLayer || [];
  function gtag(){dataLayer.push(arguments);}
  gtag('js', new Date());

  gtag('config', 'UA-XXXXXXXXX-1');
</script>
"#;

static WORKSHOP: LazyLock<SiteConfig> = LazyLock::new(|| SiteConfig {
    site_title: "Workshop Content".to_string(),
    analytics: None,
    variables: vec![Variable::new("image_path", "images/")],
});

/// The shipped workshop configuration
///
/// Built on first access and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use workshop_config::workshop_config;
///
/// let config = workshop_config();
/// assert_eq!(config.site_title(), "Workshop Content");
/// assert_eq!(config.variable("image_path").unwrap().content, "images/");
/// assert!(config.analytics().is_none());
/// ```
pub fn workshop_config() -> &'static SiteConfig {
    &WORKSHOP
}
