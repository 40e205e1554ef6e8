//! Command-line interface for workshop-rs site configuration

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use std::path::PathBuf;
use tracing::info;
use workshop_config::{SiteConfig, workshop_config};

#[derive(Parser, Debug)]
#[command(name = "workshop")]
#[command(about = "Inspect the workshop site configuration", long_about = None)]
struct Args {
    /// Load this config file instead of the user/project layers
    #[arg(short, long, global = true, conflicts_with = "shipped")]
    config: Option<PathBuf>,

    /// Use the built-in configuration and ignore config files
    #[arg(long, global = true)]
    shipped: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the whole configuration
    Show {
        /// Print as pretty JSON
        #[arg(long)]
        json: bool,
    },
    /// List template variables in definition order
    Vars,
    /// Print the content of one variable
    Get {
        /// Variable name
        name: String,
    },
    /// Print the site title
    Title,
    /// Print the analytics snippet, if enabled
    Analytics,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.log_json {
        workshop_utils::init_tracing_json();
    } else {
        workshop_utils::init_tracing();
    }

    info!("Starting workshop");

    let config = resolve_config(&args)?;
    let output = run(&args.command, &config)?;
    println!("{output}");

    Ok(())
}

fn resolve_config(args: &Args) -> anyhow::Result<SiteConfig> {
    if args.shipped {
        info!("Using shipped site config");
        return Ok(workshop_config().clone());
    }

    if let Some(path) = &args.config {
        info!("Loading site config from {}", path.display());
        return SiteConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()));
    }

    SiteConfig::load_merged().context("Failed to load layered site config")
}

fn run(command: &Commands, config: &SiteConfig) -> anyhow::Result<String> {
    match command {
        Commands::Show { json: true } => Ok(config.to_json_pretty()?),
        Commands::Show { json: false } => Ok(render_summary(config)),
        Commands::Vars => Ok(render_variables(config)),
        Commands::Get { name } => match config.variable(name) {
            Some(var) => Ok(var.content.clone()),
            None => bail!("Variable '{}' is not defined", name),
        },
        Commands::Title => Ok(config.site_title().to_string()),
        Commands::Analytics => Ok(config
            .analytics()
            .map_or_else(|| "Analytics disabled".to_string(), str::to_string)),
    }
}

fn render_summary(config: &SiteConfig) -> String {
    let analytics = if config.analytics().is_some() {
        "enabled"
    } else {
        "disabled"
    };

    let mut out = format!(
        "Site title: {}\nAnalytics:  {}\nVariables:  {}",
        config.site_title(),
        analytics,
        config.variables().len()
    );

    for var in config.variables() {
        out.push_str(&format!("\n  {} = {}", var.name, var.content));
    }

    out
}

fn render_variables(config: &SiteConfig) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Name", "Content"]);

    for var in config.variables() {
        table.add_row(vec![var.name.as_str(), var.content.as_str()]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use workshop_config::GOOGLE_ANALYTICS;

    #[test]
    fn test_get_variable() {
        let cmd = Commands::Get {
            name: "image_path".to_string(),
        };
        assert_eq!(run(&cmd, workshop_config()).unwrap(), "images/");
    }

    #[test]
    fn test_get_missing_variable() {
        let cmd = Commands::Get {
            name: "css_path".to_string(),
        };
        let err = run(&cmd, workshop_config()).unwrap_err();
        assert!(err.to_string().contains("css_path"));
    }

    #[test]
    fn test_title() {
        assert_eq!(
            run(&Commands::Title, workshop_config()).unwrap(),
            "Workshop Content"
        );
    }

    #[test]
    fn test_analytics_disabled() {
        assert_eq!(
            run(&Commands::Analytics, workshop_config()).unwrap(),
            "Analytics disabled"
        );
    }

    #[test]
    fn test_analytics_enabled() {
        let config = workshop_config().clone().with_analytics(GOOGLE_ANALYTICS);
        assert_eq!(run(&Commands::Analytics, &config).unwrap(), GOOGLE_ANALYTICS);
    }

    #[test]
    fn test_show_summary() {
        let out = run(&Commands::Show { json: false }, workshop_config()).unwrap();
        assert_eq!(
            out,
            "Site title: Workshop Content\nAnalytics:  disabled\nVariables:  1\n  image_path = images/"
        );
    }

    #[test]
    fn test_show_json() {
        let out = run(&Commands::Show { json: true }, workshop_config()).unwrap();
        let parsed = SiteConfig::from_json_str(&out).unwrap();
        assert_eq!(&parsed, workshop_config());
    }

    #[test]
    fn test_vars_table() {
        let config = SiteConfig::builder()
            .site_title("T")
            .variable("image_path", "images/")
            .variable("css_path", "css/")
            .build();
        let out = run(&Commands::Vars, &config).unwrap();

        let image = out.find("image_path").unwrap();
        let css = out.find("css_path").unwrap();
        assert!(out.contains("Name"));
        assert!(image < css);
    }

    #[test]
    fn test_resolve_shipped() {
        let args = Args::parse_from(["workshop", "--shipped", "title"]);
        assert_eq!(&resolve_config(&args).unwrap(), workshop_config());
    }

    #[test]
    fn test_resolve_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        SiteConfig::new("Custom").save_to_file(&path).unwrap();

        let args = Args::parse_from([
            OsStr::new("workshop"),
            OsStr::new("--config"),
            path.as_os_str(),
            OsStr::new("vars"),
        ]);
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.site_title(), "Custom");
        assert!(config.is_empty());
    }

    #[test]
    fn test_config_conflicts_with_shipped() {
        let result = Args::try_parse_from(["workshop", "--shipped", "--config", "x.json", "title"]);
        assert!(result.is_err());
    }
}
