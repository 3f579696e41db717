use anyhow::Context;
use clap::Parser;
use colored::*;

mod cli;
mod command;
mod commands;
mod config;
mod error;
mod executor;
mod history;
mod ui;

use cli::{Cli, Commands};
use command::Operation;
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        println!("{} {:?}", "DEBUG:".yellow(), cli);
    }

    let config = Config::load().context("failed to load configuration")?;

    let success = match &cli.command {
        Commands::Export { file } => commands::execute_operation(
            &cli,
            &config,
            Operation::Export { dest: file.clone() },
        )?,
        Commands::Import { file } => commands::execute_operation(
            &cli,
            &config,
            Operation::Import { src: file.clone() },
        )?,
        Commands::Create => commands::execute_operation(&cli, &config, Operation::Create)?,
        Commands::Drop => commands::execute_operation(&cli, &config, Operation::Drop)?,
        Commands::Exec { statement } => commands::execute_operation(
            &cli,
            &config,
            Operation::Execute {
                statement: statement.clone(),
            },
        )?,
        Commands::History => {
            commands::show_history(&config)?;
            true
        }
        Commands::Init => {
            commands::init_config()?;
            true
        }
    };

    // 외부 명령의 실패를 이 프로세스의 종료 코드로 그대로 전달
    if !success {
        std::process::exit(1);
    }

    Ok(())
}
