use std::path::PathBuf;

use clap::Parser;
use gtkw_gen::config::Overrides;
use gtkw_gen::{Cli, LayoutFormat};
use log::LevelFilter;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("gtkw-gen").chain(args.iter().copied()))
}

#[test]
fn test_script_only() {
    let cli = parse(&["simulate.sh"]).unwrap();

    assert_eq!(cli.script, PathBuf::from("simulate.sh"));
    assert_eq!(cli.out_dir, PathBuf::from("."));
    assert_eq!(cli.overrides(), Overrides::default());
    assert_eq!(cli.log_level(), LevelFilter::Warn);
}

#[test]
fn test_positional_size_and_format() {
    let cli = parse(&["simulate.sh", "1900", "900", "sav"]).unwrap();

    assert_eq!(
        cli.overrides(),
        Overrides {
            width: Some(1900),
            height: Some(900),
            format: Some(LayoutFormat::Sav),
            elaborate_command: None,
        }
    );
}

#[test]
fn test_gtkw_format_explicit() {
    let cli = parse(&["simulate.sh", "1900", "900", "gtkw"]).unwrap();
    assert_eq!(cli.format, Some(LayoutFormat::Gtkw));
}

#[test]
fn test_non_numeric_width_rejected() {
    assert!(parse(&["simulate.sh", "wide", "900"]).is_err());
}

#[test]
fn test_unknown_format_rejected() {
    assert!(parse(&["simulate.sh", "1900", "900", "vcd"]).is_err());
}

#[test]
fn test_script_required() {
    assert!(parse(&[]).is_err());
}

#[test]
fn test_options() {
    let cli = parse(&[
        "sim/simulate.sh",
        "--elaborate-cmd",
        "xelab.bat",
        "--config",
        "gtkw.toml",
        "--out-dir",
        "waves",
        "--log-level",
        "info",
    ])
    .unwrap();

    assert_eq!(cli.elaborate_command.as_deref(), Some("xelab.bat"));
    assert_eq!(cli.config, Some(PathBuf::from("gtkw.toml")));
    assert_eq!(cli.out_dir, PathBuf::from("waves"));
    assert_eq!(cli.log_level(), LevelFilter::Info);
}

#[test]
fn test_verbose_overrides_log_level() {
    let cli = parse(&["simulate.sh", "--log-level", "error", "-v"]).unwrap();
    assert_eq!(cli.log_level(), LevelFilter::Debug);
}

#[test]
fn test_invalid_log_level_falls_back_to_warn() {
    let cli = parse(&["simulate.sh", "--log-level", "chatty"]).unwrap();
    assert_eq!(cli.log_level(), LevelFilter::Warn);
}
