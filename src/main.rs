// src/main.rs

use std::{io, process};

use anyhow::Context;
use console::Term;

use ludown::{
    adapters::{
        config_loader::yaml::Yaml, converter::ProcessConverter, filesystem::RealFileSystem,
        progress::ProgressManager,
    },
    domain::resources::Resources,
    logging,
    ports::config_loader::ConfigLoader,
    services::parse_toluis_command::{ParseToLuisCommand, EXIT_FAILURE},
};

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(EXIT_FAILURE);
        }
    }
}

async fn run() -> anyhow::Result<i32> {
    let resources = Resources::bundled().context("loading bundled resources")?;
    let config = Yaml::new()
        .load_config()
        .context("loading configuration")?;

    // No spinner when stderr is redirected
    let progress = ProgressManager::new(config.use_colors, Term::stderr().is_term());

    let fs = RealFileSystem;
    let converter = ProcessConverter::from(&config.converter);
    let command = ParseToLuisCommand::new(&fs, &converter, &resources, &config, &progress);

    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = command
        .execute(
            std::env::args_os(),
            |options| logging::init_tracing(config.log_level.as_deref(), options.verbose),
            &mut out,
            &mut err,
        )
        .await;

    Ok(code)
}
