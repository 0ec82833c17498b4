//! termfolio - Entry Point

use clap::Parser;
use std::path::PathBuf;
use termfolio::model::SectionId;
use tracing::info;

/// termfolio - a personal portfolio in your terminal
#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(version)]
#[command(about = "Single-page personal portfolio rendered in the terminal")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Portfolio content file (TOML) replacing the built-in content
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Section to start at (about, experience, projects, education, skills)
    #[arg(long)]
    pub section: Option<SectionId>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Reveal the headline at once and jump between sections without easing
    #[arg(long)]
    pub no_animation: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = termfolio::config::load_config_with_precedence(args.config.clone())?;
        let merged = termfolio::config::merge_config(config_file);
        let with_env = termfolio::config::apply_env_overrides(merged);
        termfolio::config::apply_cli_overrides(
            with_env,
            termfolio::config::CliOverrides {
                content_path: args.content.clone(),
                no_animation: args.no_animation,
            },
        )
    };

    // Held until exit so buffered log lines are flushed.
    let _log_guard = termfolio::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let portfolio = termfolio::source::load_portfolio(config.content_path.as_deref())?;
    let key_bindings = termfolio::config::KeyBindings::with_overrides(&config.keybindings)?;
    let colors = termfolio::view::ColorConfig::from_env_and_args(args.no_color);
    let options = termfolio::state::StateOptions {
        mount: config.mount_options(),
        smooth_scroll: config.smooth_scroll,
        pointer_parallax: config.pointer_parallax,
    };

    termfolio::view::run_app(portfolio, options, key_bindings, colors, args.section)?;

    info!("Exited cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["termfolio", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["termfolio", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["termfolio"]);
        assert_eq!(args.config, None);
        assert_eq!(args.content, None);
        assert_eq!(args.section, None);
        assert!(!args.no_color);
        assert!(!args.no_animation);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["termfolio", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_content_path() {
        let args = Args::parse_from(["termfolio", "--content", "me.toml"]);
        assert_eq!(args.content, Some(PathBuf::from("me.toml")));
    }

    #[test]
    fn test_section_parses_case_insensitively() {
        let args = Args::parse_from(["termfolio", "--section", "Projects"]);
        assert_eq!(args.section, Some(SectionId::Projects));
    }

    #[test]
    fn test_section_rejects_unknown_name() {
        let result = Args::try_parse_from(["termfolio", "--section", "footer"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["termfolio", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_no_animation_flows_through_config_precedence_chain() {
        use termfolio::config::{
            apply_cli_overrides, apply_env_overrides, merge_config, CliOverrides, ConfigFile,
        };

        let config_file = ConfigFile {
            typewriter_delay_ms: Some(500),
            smooth_scroll: Some(true),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.typewriter_delay_ms, 500);

        let with_env = apply_env_overrides(merged);
        let args = Args::parse_from(["termfolio", "--no-animation"]);
        let with_cli = apply_cli_overrides(
            with_env,
            CliOverrides {
                content_path: args.content,
                no_animation: args.no_animation,
            },
        );

        assert_eq!(with_cli.typewriter_delay_ms, 0);
        assert_eq!(with_cli.typewriter_interval_ms, 0);
        assert!(!with_cli.smooth_scroll);
    }
}
