mod cli;

use std::borrow::Cow;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use glowmix::{
    decode_hex_color, mix_colors, parse_hex_color, BlendMode, GammaTables, GlowConfig, GlowMode,
    PackedColor, StaticGradient,
};

use cli::Command;

fn load_config(args: &cli::Args) -> Result<GlowConfig> {
    match &args.config {
        Some(path) => GlowConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(GlowConfig::default()),
    }
}

fn tables_for(config: &GlowConfig) -> Cow<'static, GammaTables> {
    if config.gamma == glowmix::gamma::DEFAULT_GAMMA {
        Cow::Borrowed(glowmix::initialize_gamma_tables())
    } else {
        Cow::Owned(config.gamma_tables())
    }
}

fn decode_line(line: &str, offset: usize) -> Result<Vec<PackedColor>> {
    let lower = line.to_ascii_lowercase().into_bytes();
    if offset > lower.len() {
        bail!("offset {offset} is past the end of a {}-byte line", lower.len());
    }
    let rest = &lower[offset..];
    if rest.len() % 6 != 0 {
        bail!("expected a multiple of 6 hex digits, got {}", rest.len());
    }
    if let Some(bad) = rest.iter().find(|b| !b.is_ascii_hexdigit()) {
        bail!("invalid hex byte {bad:#04x}");
    }
    let mut pos = offset;
    let mut colors = Vec::with_capacity(rest.len() / 6);
    while pos < lower.len() {
        let (color, next) = decode_hex_color(&lower, pos);
        colors.push(color);
        pos = next;
    }
    Ok(colors)
}

fn main() -> Result<()> {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("glowmix=info");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            log_directive
                .parse()
                .with_context(|| format!("invalid log directive {log_directive:?}"))?,
        ))
        .init();

    let config = load_config(&args)?;
    let tables = tables_for(&config);

    match args.command {
        Command::Mix {
            color1,
            color2,
            weight1,
            weight2,
            shift,
            raw,
        } => {
            let color1 = parse_hex_color(&color1).context("first color")?;
            let color2 = parse_hex_color(&color2).context("second color")?;
            let mode = if raw { BlendMode::Raw } else { config.mode };
            let mixed = mix_colors(&tables, color1, color2, weight1, weight2, shift, mode);
            tracing::debug!(%color1, %color2, %mixed, ?mode, "mixed colors");
            println!("#{mixed}");
        }
        Command::Gradient { leds, stops } => {
            let stops = if stops.is_empty() {
                config.stops()?
            } else {
                stops
                    .iter()
                    .map(|s| parse_hex_color(s).with_context(|| format!("gradient stop {s:?}")))
                    .collect::<Result<Vec<_>>>()?
            };
            let leds = leds.unwrap_or(config.leds);
            let mut gradient = StaticGradient::from_colors(&stops, leds, &tables, config.mode);
            for rgb in gradient.get_colors().chunks_exact(3) {
                println!("#{}", PackedColor::from_rgb(rgb[0], rgb[1], rgb[2]));
            }
        }
        Command::Decode { line, offset } => {
            for color in decode_line(&line, offset)? {
                println!("#{color}");
            }
        }
    }
    Ok(())
}
