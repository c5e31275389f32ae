//! ring-layout: print the pixel parts and DOUT → DIN wires of an LED ring
//! for the circuit-diagram simulator.
//!
//! ```text
//! ring-layout                      # 60 pixels, radius 500, paste-ready lines
//! ring-layout -n 24 -a 200         # smaller ring
//! ring-layout --format diagram -o diagram.json
//! ```

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use ledring::config::LayoutConfig;
use ledring::layout::RingLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One record per line with trailing commas, for pasting
    Lines,
    /// A complete diagram.json document
    Diagram,
}

#[derive(Parser, Debug)]
#[command(name = "ring-layout")]
#[command(version, about = "Generate simulator parts and wiring for a ring of addressable LEDs")]
struct Args {
    /// JSON layout config; flags below override its fields
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of pixels on the ring
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Phase offset added to every ring angle, in degrees
    #[arg(short, long, allow_hyphen_values = true)]
    phase: Option<f64>,

    /// Ring angle of the first pixel, in degrees (default: half a step)
    #[arg(short, long, allow_hyphen_values = true)]
    start: Option<f64>,

    /// Ring radius in diagram units
    #[arg(short, long)]
    amplitude: Option<f64>,

    /// Simulator part type
    #[arg(long)]
    part_type: Option<String>,

    /// Wire colour of the data chain
    #[arg(long)]
    wire_colour: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Lines)]
    format: Format,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl Args {
    fn layout_config(&self) -> Result<LayoutConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => LayoutConfig::default(),
        };
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(phase) = self.phase {
            config.phase_deg = phase;
        }
        if let Some(start) = self.start {
            config.start_deg = Some(start);
        }
        if let Some(amplitude) = self.amplitude {
            config.amplitude = amplitude;
        }
        if let Some(part_type) = &self.part_type {
            config.part_type.clone_from(part_type);
        }
        if let Some(colour) = &self.wire_colour {
            config.wire_colour.clone_from(colour);
        }
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<LayoutConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading layout config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing layout config {}", path.display()))?;
    info!("Loaded layout config from {}", path.display());
    Ok(config)
}

fn emit<W: Write>(layout: &RingLayout, format: Format, out: &mut W) -> Result<()> {
    match format {
        Format::Lines => layout.write_lines(out)?,
        Format::Diagram => {
            serde_json::to_writer_pretty(&mut *out, &layout.diagram())?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let layout = RingLayout::new(args.layout_config()?)?;

    info!(
        "Generating {} pixels as {:?}",
        layout.len(),
        args.format
    );

    match &args.output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            emit(&layout, args.format, &mut BufWriter::new(file))?;
        }
        None => emit(&layout, args.format, &mut io::stdout().lock())?,
    }
    Ok(())
}
