use std::fs;
use std::io::Write;

use astrasim_core::Site;

use crate::cli::RenderArgs;
use crate::error::CliError;

pub fn run(args: &RenderArgs, site: &Site, out: &mut impl Write) -> Result<(), CliError> {
    let page = site.render(&args.path)?;

    match &args.out {
        Some(path) => fs::write(path, page.html.as_bytes())?,
        None => writeln!(out, "{}", page.html)?,
    }

    Ok(())
}
