use std::process::ExitCode;

use employee_tracker::config::Config;
use employee_tracker::db::Store;
use employee_tracker::errors::Result;
use employee_tracker::menu::Session;
use log::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => return fail(err),
    };
    env_logger::init();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(err),
    }
}

async fn run(config: Config) -> Result<()> {
    let store = Store::connect(config.connect_options, config.delete_policy).await?;
    info!("Starting interactive session");

    let result = Session::new(&store).run().await;

    // Release the connection whether the session ended by Exit or by error.
    store.close().await;
    result
}

fn fail(err: employee_tracker::errors::AppError) -> ExitCode {
    error!("{}", err);
    eprintln!("{}", err);
    ExitCode::FAILURE
}
