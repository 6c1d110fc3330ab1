use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "glowmix", version, about = "Decode and blend packed LED colors")]
pub struct Args {
    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `glowmix=debug`
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Blend two colors
    Mix {
        color1: String,
        color2: String,
        #[arg(long, default_value_t = 128)]
        weight1: u32,
        #[arg(long, default_value_t = 128)]
        weight2: u32,
        #[arg(long, default_value_t = 8)]
        shift: u32,
        /// Blend stored bytes without gamma correction
        #[arg(long)]
        raw: bool,
    },
    /// Print one color per LED along a gradient
    Gradient {
        #[arg(long)]
        leds: Option<u16>,
        /// Hex stops; the configured gradient is used when empty
        stops: Vec<String>,
    },
    /// Decode consecutive six-digit colors from a hex line
    Decode {
        line: String,
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
