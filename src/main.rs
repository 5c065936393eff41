use clap::Parser;
use miette::Result;
use shorthand::cli::{Cli, Commands};
use shorthand::output::Printer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let printer = Printer::new();

    match cli.command {
        Commands::Expand(args) => {
            let config = shorthand::load_config(cli.config.as_deref(), ".")?;
            shorthand::cli::expand::run(args, &config, &printer)?
        }
        Commands::Check(args) => {
            let config = shorthand::load_config(cli.config.as_deref(), ".")?;
            shorthand::cli::check::run(args, &config, &printer)?
        }
        Commands::List(args) => shorthand::cli::list::run(args, &printer)?,
        Commands::Init(args) => shorthand::cli::init::run(args, &printer)?,
        Commands::Completions(args) => shorthand::cli::completions::run(args)?,
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
