use anyhow::Result;
use clap::Parser;

use csvconv::cli::{self, Args, CliConfig};
use csvconv::conversion::BatchRunner;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(error) => {
            cli::handle_error(&error);
            std::process::exit(2);
        }
    };

    if config.is_verbose() && !config.is_quiet() {
        println!("Input directory: {}", config.args.input.display());
        println!("Output directory: {}", config.args.output.display());
    }

    let runner = BatchRunner::new(config.conversion_config.clone(), config.batch_options());

    // A directory listing failure is fatal and exits non-zero;
    // per-file failures were already logged by the runner.
    let report = runner.run(&config.args.input, &config.args.output)?;

    println!("{}", report.stats.summary_line());

    if config.want_stats() {
        println!("{}", serde_json::to_string_pretty(&report.stats)?);
    }

    Ok(())
}
