use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};

use gtkw_gen::Cli;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(cli.log_level())
        .init();

    debug!("Parsed arguments: {:?}", cli);

    if let Err(err) = try_main(&cli) {
        error!("{:#}", err);
        process::exit(1);
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    let written = gtkw_gen::run(cli)
        .with_context(|| format!("no layout written for {}", cli.script.display()))?;

    info!(
        "Layout written to {} and {}",
        written.layout_path.display(),
        written.dump_path.display()
    );
    Ok(())
}
