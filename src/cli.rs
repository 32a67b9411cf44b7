//! Command-line interface of the `resoil` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::shell::{DEFAULT_OILS_PATH, DEFAULT_SPRINGS_PATH};

/// Spring and damper sizing with catalog-based component selection.
#[derive(Debug, Parser)]
#[command(name = "resoil", version, about)]
pub struct Cli {
    /// Springs catalog (CSV)
    #[arg(long, global = true, default_value = DEFAULT_SPRINGS_PATH)]
    pub springs: PathBuf,

    /// Oils catalog (CSV)
    #[arg(long, global = true, default_value = DEFAULT_OILS_PATH)]
    pub oils: PathBuf,

    /// Selection settings (JSON); defaults are used for missing fields
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive shell
    Shell {
        /// Read commands from a file instead of standard input
        #[arg(long)]
        script: Option<PathBuf>,
    },

    /// Pick the spring and oil closest to a target natural frequency
    Select {
        /// Target natural angular frequency, rad/s
        #[arg(long)]
        omega: f64,

        /// Suspended mass, kg
        #[arg(long)]
        mass: f64,

        /// Initial displacement, m
        #[arg(long)]
        amplitude: f64,

        /// Save the response plot as PNG
        #[arg(long)]
        plot: Option<PathBuf>,

        /// Save the response samples as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Print the reference spring and oil walkthrough
    Demo,
}
