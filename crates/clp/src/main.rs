//! Code Learning Platform - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `clp` / `clp serve` | Run the HTTP API |
//! | `clp explain -l python file.py` | Explain a file from the terminal |

use clap::Parser;
use clp::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}
