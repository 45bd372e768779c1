use clap::{Args, Parser, Subcommand};

pub mod display;
pub mod export;
pub mod input;
pub mod list;
pub mod normalize;
pub mod show;
pub mod stats;

pub use display::{print_company, print_person};
pub use export::run_export;
pub use input::{load_contacts, load_profiles};
pub use list::run_list;
pub use normalize::run_normalize;
pub use show::run_show;
pub use stats::run_stats;

#[derive(Parser)]
#[command(name = "profilecmd")]
#[command(about = "Company profile normalizer for the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a profile export and print the result as JSON
    Normalize(NormalizeArgs),
    /// List people or companies from a profile export
    List(ListArgs),
    /// Show full details for a person or company
    Show(ShowArgs),
    /// Print summary statistics for a profile export
    Stats(StatsArgs),
    /// Export people or companies as CSV
    Export(ExportArgs),
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Profile export file, or "-" for stdin
    pub file: String,
    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Profile export file, or "-" for stdin
    pub file: String,
    /// List companies instead of people
    #[arg(short, long)]
    pub companies: bool,
    #[arg(short, long, default_value = "0")]
    pub limit: u32,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Profile export file, or "-" for stdin
    pub file: String,
    /// Person or company id, or part of a name
    pub identifier: String,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Profile export file, or "-" for stdin
    pub file: String,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Profile export file, or "-" for stdin
    pub file: String,
    /// Export companies instead of people
    #[arg(short, long)]
    pub companies: bool,
    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}
