use clap::Parser;
use totpvault::cli::{output, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Add {
            name,
            identifier,
            secret,
        }) => totpvault::cli::commands::add::execute(&cli, name, identifier.as_deref(), secret),
        Some(Commands::ChangePassphrase) => {
            totpvault::cli::commands::change_passphrase::execute(&cli)
        }
        #[cfg(feature = "audit-log")]
        Some(Commands::Audit { last }) => {
            totpvault::cli::commands::audit_cmd::execute(&cli, *last)
        }
        // No subcommand: show the code table (the interactive viewer's
        // non-interactive counterpart).
        Some(Commands::List) | None => totpvault::cli::commands::list::execute(&cli),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
