//! Site configuration for workshop-rs
//!
//! This crate provides the configuration record a site generator reads to
//! build the workshop content site: the site title, an optional analytics
//! snippet, and the named variables substituted into templates.
//!
//! The record is plain data. It does no templating and no validation;
//! duplicate variable names or an empty title pass through untouched.
//!
//! # Quick Start
//!
//! ```
//! use workshop_config::{Variable, workshop_config};
//!
//! let config = workshop_config();
//! assert_eq!(config.site_title(), "Workshop Content");
//! assert_eq!(config.variables(), &[Variable::new("image_path", "images/")]);
//! assert!(config.analytics().is_none());
//! ```
//!
//! # Overriding from files
//!
//! ```no_run
//! use workshop_config::SiteConfig;
//!
//! // shipped record, then ~/.config/workshop/site.json, then ./site.json
//! let config = SiteConfig::load_merged()?;
//! # Ok::<(), workshop_config::ConfigError>(())
//! ```

mod error;
mod loader;
mod record;
mod shipped;

pub use error::{ConfigError, Result};
pub use loader::{CONFIG_FILE_NAME, PROJECT_CONFIG_FILE, user_config_path};
pub use record::{SiteConfig, SiteConfigBuilder, Variable};
pub use shipped::{GOOGLE_ANALYTICS, workshop_config};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ConfigError, Result};
    pub use crate::record::{SiteConfig, Variable};
    pub use crate::shipped::workshop_config;
}
