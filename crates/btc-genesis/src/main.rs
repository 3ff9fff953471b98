use std::process::ExitCode;

use btc_genesis::{
    cli,
    telemetry,
    Config,
};

#[tokio::main]
async fn main() -> ExitCode {
    let command = cli::get();
    let config = match Config::get() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("failed reading config:\n{error}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(error) = telemetry::configure()
        .set_filter_directives(&config.log)
        .set_pretty_print(config.pretty_print)
        .try_init()
    {
        eprintln!("failed to initialize telemetry: {error:?}");
        return ExitCode::FAILURE;
    }

    if let Err(error) = btc_genesis::run(command, &config).await {
        eprintln!("Error: {error:?}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
