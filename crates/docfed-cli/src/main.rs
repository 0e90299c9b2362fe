//! The docfed binary.

use clap::Parser;

use docfed_cli::{CliArgs, DocfedCli};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let cli = match DocfedCli::from_args("docfed", &args) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("docfed: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = cli.run(args).await {
        eprintln!("docfed: {err}");
        std::process::exit(2);
    }
}
