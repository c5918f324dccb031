use clap::{Parser, Subcommand};

/// Operands are JSON row data, e.g. '[[1, 2], [3, 4]]', or `@path`
/// to read the JSON from a file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd,

    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Print `Matrix([...])` instead of the compact form.
    #[arg(long, default_value_t = false)]
    pub repr: bool,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    Add { a: String, b: String },
    Sub { a: String, b: String },
    Mul { a: String, b: String },
    Show { a: String },
}
