//! Command-line front end for the 3x3x3 cube model and cross solver.

mod cli;
mod prefs;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();
    color_eyre::install()?;

    let prefs = prefs::Preferences::load(args.prefs.as_deref());
    cli::exec(args.subcommand, &prefs)
}
