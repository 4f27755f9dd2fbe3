use clap::Parser;
use inspect::config::{InspectConfig, OutputFormat};
use inspect::report::Inspector;
use std::path::PathBuf;

mod inspect;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Derive capture parameters from an mmWave Studio Lua script"
)]
struct Args {
    /// Lua configuration script for the radar
    lua: PathBuf,
    /// Load inspector settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Also print the extracted variable and call tables
    #[arg(long, default_value_t = false)]
    raw: bool,
    /// Whole frames the capture buffer should hold
    #[arg(long)]
    frames: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match args.config {
        Some(path) => InspectConfig::load(path)?,
        None => InspectConfig::default(),
    }
    .with_overrides(args.format, args.raw, args.frames);

    let inspector = Inspector::new(config);
    let report = inspector.inspect(&args.lua)?;
    println!("{}", inspector.render(&report)?);

    Ok(())
}
