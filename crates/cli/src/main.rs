use clap::Parser;

#[tokio::main]
async fn main() {
    if let Err(err) = cointab_cli::run(cointab_cli::args::Cli::parse()).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
