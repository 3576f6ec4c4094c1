#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use std::process::ExitCode;

#[derive(FromArgs, Debug)]
/// Colour adjustment tool for planar P6 images
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Brighten(commands::adjust::BrightenCmd),
    Saturate(commands::adjust::SaturateCmd),
    Invert(commands::adjust::InvertCmd),
    Contrast(commands::adjust::ContrastCmd),
    Menu(commands::menu::MenuCmd),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli: TopLevel = argh::from_env();

    let result = match cli.command {
        Commands::Brighten(cmd) => commands::adjust::handle_adjust_command(cmd.into()),
        Commands::Saturate(cmd) => commands::adjust::handle_adjust_command(cmd.into()),
        Commands::Invert(cmd) => commands::adjust::handle_adjust_command(cmd.into()),
        Commands::Contrast(cmd) => commands::adjust::handle_adjust_command(cmd.into()),
        Commands::Menu(cmd) => commands::menu::handle_menu_command(cmd),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
