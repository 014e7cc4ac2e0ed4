//! Command-line interface for the `facelet` cube engine.

mod cli;
mod settings;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging. Warnings about skipped settings are shown by default.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    color_eyre::install()?;

    let settings = settings::Settings::load(args.config.as_deref())?;
    log::debug!("Loaded settings: {settings:?}");

    let subcommand = args.subcommand.unwrap_or(cli::Subcommand::Demo);
    cli::exec(subcommand, &settings, &mut std::io::stdout().lock())
}
