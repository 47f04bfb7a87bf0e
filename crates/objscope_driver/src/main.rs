use std::error::Error as _;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use objscope_resolve::ScopedObjectResolver;
use tracing_subscriber::EnvFilter;

mod load;
mod query;

use load::DriverError;
use query::Query;

#[derive(Parser)]
#[command(name = "objscope")]
#[command(about = "Resolve object and group names of a game project", version)]
struct Cli {
    /// Project file (JSON)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Resolve names as seen from this layout
    #[arg(short, long, global = true)]
    layout: Option<String>,

    /// Print answers as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(flatten)]
    Query(Query),

    /// Print a shell completion script
    Completions { shell: Shell },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), DriverError> {
    let query = match cli.command {
        Command::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "objscope", &mut io::stdout());
            return Ok(());
        }
        Command::Query(query) => query,
    };

    let path = cli.project.ok_or(DriverError::MissingProject)?;
    let project = load::load_project(&path)?;
    let resolver = match &cli.layout {
        Some(name) => {
            let layout = project
                .layout(name)
                .ok_or_else(|| DriverError::UnknownLayout(name.clone()))?;
            ScopedObjectResolver::for_project_and_layout(&project, layout)
        }
        None => ScopedObjectResolver::for_project(&project),
    };
    tracing::debug!(?resolver, ?query, "answering");

    let answer = query::answer(&resolver, &query);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        print!("{}", query::render_text(&answer));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_query_with_global_flags() {
        let cli = Cli::try_parse_from([
            "objscope", "expand", "Enemies", "--prefer", "Bat", "--project", "game.json", "-l", "Level1",
        ])
        .unwrap();
        assert_eq!(cli.layout.as_deref(), Some("Level1"));
        assert!(matches!(
            cli.command,
            Command::Query(Query::Expand { ref name, prefer: Some(ref p) }) if name == "Enemies" && p == "Bat"
        ));
    }

    #[test]
    fn test_missing_project() {
        let cli = Cli::try_parse_from(["objscope", "objects"]).unwrap();
        assert!(matches!(run(cli), Err(DriverError::MissingProject)));
    }
}
