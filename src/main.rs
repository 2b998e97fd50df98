use clap::Parser;
use menu_mirror::cli::commands::{cmd_search, cmd_show, cmd_trigger};
use menu_mirror::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve shared settings: CLI > config > default
    let snapshot = cli
        .snapshot
        .as_deref()
        .or(config.snapshot.as_deref())
        .unwrap_or("menu-snapshot.yaml");
    let pid = cli.pid.or(config.pid);
    let trace = cli.trace.as_deref().or(config.trace.path.as_deref());

    match cli.command {
        Commands::Show { format } => {
            let format = format.unwrap_or(config.show.format);
            cmd_show(snapshot, pid, &format, cli.verbose, trace)?;
        }
        Commands::Search { keyword } => {
            cmd_search(snapshot, pid, &keyword, cli.verbose, trace)?;
        }
        Commands::Trigger { path } => {
            let activated = cmd_trigger(snapshot, pid, &path, cli.verbose, trace)?;
            if !activated {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
