use std::process::ExitCode;

use anyhow::Context;
use smtptest::{Config, logging};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let config = Config::default();
    let mut stdout = std::io::stdout().lock();

    let result = smtptest::run(&config, &mut stdout).await;
    let status = smtptest::exit_status(&result);

    if let Err(err) =
        result.with_context(|| format!("delivery check against {} failed", config.server))
    {
        eprintln!("{err:#}");
    }

    ExitCode::from(status)
}
