use clap::Parser;
use random_teams::{
    find_format, load_formats, Dex, FactoryPools, Format, Generator, GeneratorOptions, Id,
    SeededRng,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generate a random team for a format and print it as JSON.
#[derive(Parser)]
#[command(name = "random-teams")]
#[command(about = "Procedural team assembly for random battle formats", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding dex.ron, formats.ron and the factory set files
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Format name or id, e.g. "gen8randombattle"
    #[arg(long, default_value = "gen8randombattle")]
    format: String,

    /// Seed for the random stream; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Species of the day, for formats that feature one
    #[arg(long)]
    potd: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_factory(data: &Path, format: &Format, dex: &Dex) -> Result<Option<FactoryPools>, Box<dyn std::error::Error>> {
    match format.team.factory_file() {
        Some(file) => Ok(Some(FactoryPools::load(data, file, dex)?)),
        None => Ok(None),
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let dex = Dex::load(&cli.data)?;
    let formats = load_formats(&cli.data)?;
    let format = find_format(&formats, &cli.format)?;
    let factory = load_factory(&cli.data, format, &dex)?;

    let options = GeneratorOptions {
        species_of_the_day: cli.potd.as_deref().map(Id::from),
    };
    let generator = Generator::for_format(&dex, format, options, factory.as_ref())?;

    let mut rng = match cli.seed {
        Some(seed) => SeededRng::new(seed),
        None => SeededRng::from_entropy(),
    };
    let team = generator.generate(&mut rng)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&team)?
    } else {
        serde_json::to_string(&team)?
    };
    println!("{}", json);
    Ok(())
}
