use clap::Parser;

/// notelm - launcher for the NotebookLM automation scripts
#[derive(Parser, Debug)]
#[command(name = "notelm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Script to run, with or without the `scripts/` prefix or `.py` suffix
    #[arg(value_name = "SCRIPT")]
    pub script: Option<String>,

    /// Arguments forwarded verbatim to the script
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
