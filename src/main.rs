use anyhow::Context;
use clap::Parser;
use std::io;

use circle_ussd::cli::Cli;
use circle_ussd::config::Config;
use circle_ussd::shutdown::ShutdownCoordinator;
use circle_ussd::ussd::UssdEngine;
use circle_ussd::{logging, script, ui};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let mut engine = UssdEngine::with_builtin_menu().context("Menu registry is inconsistent")?;

    if cli.check {
        let screens = engine.registry().screens();
        let options: usize = screens.iter().map(|screen| screen.options.len()).sum();
        println!("Menu registry OK: {} screens, {} options", screens.len(), options);
        println!(
            "Config OK: {} on {}",
            config.session.service_code, config.session.operator
        );
        return Ok(());
    }

    if let Some(keys) = &cli.script {
        let mut stdout = io::stdout().lock();
        script::run_script(&mut engine, keys, &mut stdout).context("Failed to write script output")?;
        return Ok(());
    }

    let shutdown = ShutdownCoordinator::new();
    shutdown
        .install_signal_handlers()
        .context("Failed to install signal handlers")?;
    ui::runtime::run(config, engine, &shutdown).context("Terminal UI failed")?;
    Ok(())
}
