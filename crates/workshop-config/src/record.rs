//! The site configuration record
//!
//! [`SiteConfig`] holds the site title, an optional analytics snippet, and the
//! ordered list of [`Variable`]s a site generator substitutes into templates.
//! Nothing here validates: duplicate variable names and empty titles are
//! accepted as-is and left for the consumer to notice.

use serde::{Deserialize, Serialize};

/// A named template variable
///
/// # Examples
///
/// ```
/// use workshop_config::Variable;
///
/// let var = Variable::new("image_path", "images/");
/// assert_eq!(var.name, "image_path");
/// assert_eq!(var.content, "images/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Name used by templates to refer to this variable
    pub name: String,

    /// Text substituted for the variable
    #[serde(default)]
    pub content: String,
}

impl Variable {
    /// Create a new variable definition
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Site configuration consumed by the site generator
///
/// # JSON shape
///
/// ```json
/// {
///   "site_title": "Workshop Content",
///   "variables": [
///     { "name": "image_path", "content": "images/" }
///   ]
/// }
/// ```
///
/// `analytics` is omitted when disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Human-readable site title
    #[serde(default)]
    pub site_title: String,

    /// Raw HTML/script markup for the consumer to inject, if enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<String>,

    /// Template variables, in definition order
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl SiteConfig {
    /// Create a configuration with a title, no analytics and no variables
    pub fn new(site_title: impl Into<String>) -> Self {
        Self {
            site_title: site_title.into(),
            analytics: None,
            variables: Vec::new(),
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> SiteConfigBuilder {
        SiteConfigBuilder::default()
    }

    /// Enable analytics with the given snippet
    pub fn with_analytics(mut self, snippet: impl Into<String>) -> Self {
        self.analytics = Some(snippet.into());
        self
    }

    /// Disable analytics
    pub fn without_analytics(mut self) -> Self {
        self.analytics = None;
        self
    }

    /// Get the site title
    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    /// Get the analytics snippet, if enabled
    pub fn analytics(&self) -> Option<&str> {
        self.analytics.as_deref()
    }

    /// Get all variables in definition order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Look up a variable by name
    ///
    /// With duplicate names the first definition wins.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Names of all variables in definition order, duplicates included
    pub fn variable_names(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.name.as_str()).collect()
    }

    /// Whether no variables are defined
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        crate::workshop_config().clone()
    }
}

/// Builder for [`SiteConfig`]
///
/// # Examples
///
/// ```
/// use workshop_config::SiteConfig;
///
/// let config = SiteConfig::builder()
///     .site_title("Docs")
///     .variable("image_path", "img/")
///     .variable("css_path", "css/")
///     .build();
///
/// assert_eq!(config.variable_names(), vec!["image_path", "css_path"]);
/// assert!(config.analytics().is_none());
/// ```
#[derive(Debug, Default)]
pub struct SiteConfigBuilder {
    site_title: Option<String>,
    analytics: Option<String>,
    variables: Vec<Variable>,
}

impl SiteConfigBuilder {
    /// Set the site title
    pub fn site_title(mut self, title: impl Into<String>) -> Self {
        self.site_title = Some(title.into());
        self
    }

    /// Set the analytics snippet
    pub fn analytics(mut self, snippet: impl Into<String>) -> Self {
        self.analytics = Some(snippet.into());
        self
    }

    /// Append a variable definition
    pub fn variable(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.variables.push(Variable::new(name, content));
        self
    }

    /// Build the configuration
    pub fn build(self) -> SiteConfig {
        SiteConfig {
            site_title: self.site_title.unwrap_or_default(),
            analytics: self.analytics,
            variables: self.variables,
        }
    }
}
