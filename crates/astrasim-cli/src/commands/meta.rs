use std::io::Write;

use astrasim_core::Site;

use crate::cli::MetaArgs;
use crate::error::CliError;

pub fn run(args: &MetaArgs, site: &Site, pretty: bool, out: &mut impl Write) -> Result<(), CliError> {
    let metadata = site.metadata(&args.path)?;
    let payload = if pretty {
        serde_json::to_string_pretty(&metadata)?
    } else {
        serde_json::to_string(&metadata)?
    };
    writeln!(out, "{payload}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn prints_metadata_json_for_empty_symbol() {
        let mut out = Vec::new();
        run(
            &MetaArgs {
                path: String::from("/stock/"),
            },
            &Site::default(),
            false,
            &mut out,
        )
        .expect("meta succeeds");

        let value: Value = serde_json::from_slice(&out).expect("json");
        assert_eq!(value["title"], "AstraSim — Stock");
        assert_eq!(value["page"], "stock");
        assert_eq!(value["params"], serde_json::json!({}));
    }
}
