use clap::{Parser, Subcommand};
use velo_site::config::BuildConfig;
use velo_site::{gallery, optimize, output, site};

#[derive(Parser)]
#[command(name = "velo-site")]
#[command(about = "Build toolchain for a single-page cycling portfolio")]
#[command(long_about = "\
Build toolchain for a single-page cycling portfolio

The page itself is a hand-maintained index.html; these tools own the
generated parts. Expected layout, relative to the working directory:

  Pictures/                  source images (flat; subdirectories ignored)
  Pictures/optimized/        derived variants (created on demand)
  data/content.json          content document for the site builder
  index.html                 template with marker pairs

The site builder replaces the interior of each
<!-- SECTION-START:name --> / <!-- SECTION-END:name --> pair it finds;
the gallery tool uses the single <!-- GALLERY-START --> /
<!-- GALLERY-END --> pair and fails if it is absent.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate thumb/medium JPEG and WebP variants for every source image
    Optimize,
    /// Render all content sections into the template
    Build,
    /// Rebuild only the gallery region from directory contents
    Gallery,
    /// Run the full pipeline: optimize, then build
    All,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = BuildConfig::default();

    match cli.command {
        Command::Optimize => run_optimize(&config)?,
        Command::Build => run_build(&config)?,
        Command::Gallery => run_gallery(&config)?,
        Command::All => {
            println!("==> Stage 1: Optimizing images");
            run_optimize(&config)?;
            println!("==> Stage 2: Building site");
            run_build(&config)?;
        }
    }

    Ok(())
}

fn run_optimize(config: &BuildConfig) -> Result<(), Box<dyn std::error::Error>> {
    let report = optimize::optimize(config)?;
    println!(
        "{}",
        output::format_optimize_summary(&report, &config.optimized_dir)
    );
    Ok(())
}

fn run_build(config: &BuildConfig) -> Result<(), Box<dyn std::error::Error>> {
    let report = site::build_site(config)?;
    println!("{}", output::format_site_summary(&report));
    Ok(())
}

fn run_gallery(config: &BuildConfig) -> Result<(), Box<dyn std::error::Error>> {
    let report = gallery::build_gallery(config)?;
    println!("{}", output::format_gallery_summary(&report));
    Ok(())
}
