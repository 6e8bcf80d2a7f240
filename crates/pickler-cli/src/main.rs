//! Entry point for the `pickler` feature-document checker.

use eyre::Result;

fn main() -> Result<()> {
    pickler_cli::run()
}
