mod cli;
mod commands;
mod observability;

use clap::Parser;
use cli::Cli;

fn main() {
    observability::init_tracing();
    notelm_env::console::normalize_console_utf8();

    let cli = Cli::parse();

    let Some(script) = cli.script else {
        commands::run::print_usage();
        std::process::exit(1);
    };

    let code = commands::run::dispatch(&script, &cli.args);
    std::process::exit(code);
}
