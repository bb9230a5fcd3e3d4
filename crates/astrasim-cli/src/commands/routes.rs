use std::io::Write;

use astrasim_core::Site;

use crate::cli::{OutputFormat, RoutesArgs};
use crate::error::CliError;

pub fn run(args: &RoutesArgs, site: &Site, pretty: bool, out: &mut impl Write) -> Result<(), CliError> {
    let routes = site.routes();

    match args.format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&routes)?
            } else {
                serde_json::to_string(&routes)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => {
            let width = routes
                .iter()
                .map(|route| route.pattern.len())
                .max()
                .unwrap_or(0)
                .max("PATTERN".len());

            writeln!(out, "{:<width$}  PAGE", "PATTERN")?;
            for route in &routes {
                writeln!(out, "{:<width$}  {}", route.pattern, route.page)?;
            }
        }
    }

    Ok(())
}
