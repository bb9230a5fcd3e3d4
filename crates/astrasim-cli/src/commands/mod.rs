mod meta;
mod render;
mod routes;
mod serve;

use std::io;

use astrasim_core::Site;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let site = Site::default();

    match &cli.command {
        Command::Serve(args) => serve::run(args).await,
        Command::Render(args) => render::run(args, &site, &mut io::stdout().lock()),
        Command::Meta(args) => meta::run(args, &site, cli.pretty, &mut io::stdout().lock()),
        Command::Routes(args) => routes::run(args, &site, cli.pretty, &mut io::stdout().lock()),
    }
}
