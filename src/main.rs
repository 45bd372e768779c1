use clap::Parser;
use profilecmd::cli::{
    run_export, run_list, run_normalize, run_show, run_stats, Cli, Commands,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize(args) => {
            run_normalize(&args.file, args.pretty, args.output.as_deref())?;
        }
        Commands::List(args) => {
            run_list(&args.file, args.companies, args.limit)?;
        }
        Commands::Show(args) => {
            run_show(&args.file, &args.identifier)?;
        }
        Commands::Stats(args) => {
            run_stats(&args.file)?;
        }
        Commands::Export(args) => {
            run_export(&args.file, args.companies, args.output.as_deref())?;
        }
    }

    Ok(())
}
