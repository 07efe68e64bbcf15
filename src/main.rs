use clap::Parser;
use std::path::PathBuf;
use travel_gallery::imaging::ExifDecoder;
use travel_gallery::{config, output, pipeline};

#[derive(Parser)]
#[command(name = "travel-gallery")]
#[command(version, about = "Static page generator for travel photo albums")]
#[command(long_about = "\
Static page generator for travel photo albums

Every subdirectory of the travel root is a trip, named YYYY-MM-location.
Every .jpg/.jpeg/.png/.gif/.webp file in it becomes a photo on the page,
with its capture date, camera, map link and description from EXIF/IPTC.

Layout (defaults):

  template.html                    # Contains <!-- PUT CONTENT HERE -->
  index.html                       # Generated, overwritten on every run
  travel/
  ├── 2023-07-paris-france/        # → \"July 2023, Paris France\"
  │   ├── 001-eiffel.jpg
  │   └── 002-louvre.jpg
  └── 2024-02-tokyo/
      └── shibuya.webp

Run with no arguments to build index.html from the defaults. No config file
is read unless --config is given.")]
struct Cli {
    /// TOML config file layered over the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Travel root directory (overrides config)
    #[arg(long)]
    travel_dir: Option<PathBuf>,

    /// Template file (overrides config)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output file (overrides config)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut build_config = config::resolve_config(cli.config.as_deref())?;
    if let Some(travel_dir) = cli.travel_dir {
        build_config.travel_dir = travel_dir;
    }
    if let Some(template) = cli.template {
        build_config.template = template;
    }
    if let Some(output) = cli.output {
        build_config.output = output;
    }

    println!(
        "==> Building {} from {}",
        build_config.output.display(),
        build_config.travel_dir.display()
    );
    let report = pipeline::run(&build_config, &ExifDecoder::new())?;
    output::print_build_output(&report);

    Ok(())
}
