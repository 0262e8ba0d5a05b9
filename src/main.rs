use clap::Parser;

#[derive(Parser)]
#[command(name = "lp-seed")]
#[command(version)]
#[command(
    about = "Seed the landing pages service with its built-in component templates",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = lp_seed::seed() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
