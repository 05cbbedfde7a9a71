// Hide console window on Windows for release builds (GUI app).
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use bevy::prelude::*;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use ardice::ar_scene::{ArDicePlugin, DemoSettings};

/// AR Dice - tap a detected floor to throw a die onto it
#[derive(Parser)]
#[command(name = "ardice")]
#[command(
    author,
    version,
    about = "AR Dice - detect a floor plane and tap it to throw a physics die"
)]
struct Cli {
    /// Path to a RON settings file (defaults are used when omitted)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Print the effective settings as RON and exit
    #[arg(long)]
    print_settings: bool,

    /// Draw physics collider wireframes
    #[arg(long)]
    debug_physics: bool,
}

fn load_settings(cli: &Cli) -> Result<DemoSettings, String> {
    match &cli.settings {
        Some(path) => DemoSettings::load_from_file(path),
        None => Ok(DemoSettings::default()),
    }
}

fn main() {
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    if cli.print_settings {
        match settings.to_ron_string() {
            Ok(text) => println!("{}", text),
            Err(err) => {
                eprintln!("{} {}", "Error:".red().bold(), err);
                std::process::exit(1);
            }
        }
        return;
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "AR Dice".to_string(),
                resolution: (1280, 720).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.55, 0.6, 0.65)))
        .insert_resource(settings)
        .add_plugins(ArDicePlugin {
            debug_physics: cli.debug_physics,
        })
        .run();
}
