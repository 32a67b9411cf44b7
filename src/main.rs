use std::{
    fs::File,
    io::{self, BufReader, IsTerminal},
};

use anyhow::Context;
use clap::Parser;
use resoil::{
    cli::{Cli, Command},
    models::suspension::{CatalogSelector, PLOT_SIZE, SelectionConfig, SelectionInput},
    shell::{self, Shell, ShellOptions},
    support::catalog::Catalog,
};
use twine_core::Model;
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Length, Mass},
    length::meter,
    mass::kilogram,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => SelectionConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SelectionConfig::default(),
    };

    match args.command {
        Command::Shell { script } => {
            let mut shell = Shell::new(ShellOptions {
                springs_path: args.springs,
                oils_path: args.oils,
                config,
            });
            let stdout = io::stdout().lock();

            match script {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("opening script {}", path.display()))?;
                    shell.run(BufReader::new(file), stdout, false)?;
                }
                None => {
                    let stdin = io::stdin();
                    let prompt = stdin.is_terminal();
                    shell.run(stdin.lock(), stdout, prompt)?;
                }
            }
        }

        Command::Select {
            omega,
            mass,
            amplitude,
            plot,
            csv,
        } => {
            let springs = Catalog::from_path(&args.springs)
                .with_context(|| format!("loading springs from {}", args.springs.display()))?;
            let oils = Catalog::from_path(&args.oils)
                .with_context(|| format!("loading oils from {}", args.oils.display()))?;

            let selector = CatalogSelector::new(springs, oils, config)?;
            let input = SelectionInput::new(
                AngularVelocity::new::<radian_per_second>(omega),
                Mass::new::<kilogram>(mass),
                Length::new::<meter>(amplitude),
            )?;
            let selection = selector.call(&input)?;
            println!("{selection}");

            if let Some(path) = plot {
                selection
                    .response
                    .save_png(&path, PLOT_SIZE)
                    .with_context(|| format!("saving plot to {}", path.display()))?;
                println!("saved plot to {}", path.display());
            }
            if let Some(path) = csv {
                selection
                    .response
                    .save_csv(&path)
                    .with_context(|| format!("exporting samples to {}", path.display()))?;
                println!("exported {} samples to {}", selection.response.len(), path.display());
            }
        }

        Command::Demo => shell::write_demo(io::stdout().lock())?,
    }

    Ok(())
}
