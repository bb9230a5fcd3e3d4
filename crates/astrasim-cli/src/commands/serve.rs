use astrasim_web::{init_tracing, WebConfig};

use crate::cli::ServeArgs;
use crate::error::CliError;

pub async fn run(args: &ServeArgs) -> Result<(), CliError> {
    let mut config = WebConfig::from_env()?;
    if let Some(listen) = args.listen {
        config = config.with_listen_addr(listen);
    }

    init_tracing(config.debug);
    tracing::info!(
        app_name = %config.app_name,
        environment = %config.environment,
        version = %config.version,
        "starting AstraSim web service"
    );

    astrasim_web::serve(config).await.map_err(CliError::Server)
}
