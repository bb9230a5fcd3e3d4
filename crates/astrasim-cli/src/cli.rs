//! CLI argument definitions for AstraSim.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `serve` | Run the dashboard HTTP service |
//! | `render` | Render the HTML document for a path |
//! | `meta` | Print the resolved metadata for a path |
//! | `routes` | List the registered route table |
//!
//! # Examples
//!
//! ```bash
//! astrasim serve --listen 0.0.0.0:8080
//! astrasim render /stock/aapl --out aapl.html
//! astrasim meta /stock/aapl --pretty
//! astrasim routes --format table
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// AstraSim - scenario-first Monte Carlo dashboard shell
#[derive(Debug, Parser)]
#[command(
    name = "astrasim",
    author,
    version,
    about = "AstraSim dashboard shell",
    long_about = "Serve or render the AstraSim dashboard pages.\n\
\n\
Pages are resolved against a fixed route table (/, /screener, /scenario-builder,\n\
/simulation, /stock/:symbol) and framed by the shared navbar, sidebar and footer.\n\
\n\
Use 'astrasim <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text table for terminal display.
    Table,
    /// Single JSON document.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP service.
    ///
    /// Configuration comes from ASTRASIM_* environment variables.
    Serve(ServeArgs),

    /// Render the full HTML document for a request path.
    ///
    /// Exits with code 3 when no route matches.
    Render(RenderArgs),

    /// Print the page metadata a path resolves to, without rendering it.
    Meta(MetaArgs),

    /// List the registered routes.
    Routes(RoutesArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address, overrides ASTRASIM_LISTEN_ADDR.
    #[arg(long)]
    pub listen: Option<SocketAddr>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Request path, e.g. /stock/aapl.
    pub path: String,

    /// Write the document to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct MetaArgs {
    /// Request path, e.g. /stock/aapl.
    pub path: String,
}

#[derive(Debug, Args)]
pub struct RoutesArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}
