use cc_review::{DiffSource, ReviewError, render};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cc-review", version)]
#[command(about = "Review the changes in a git working tree, file by file and hunk by hunk")]
struct Cli {
    /// Reference to diff against (defaults to HEAD)
    reference: Option<String>,

    /// Run as if started in this directory
    #[arg(short = 'C', long = "repo", default_value = ".")]
    repo: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL", hide = true)]
    completions: Option<clap_complete::Shell>,

    /// Print a man page and exit
    #[arg(long, hide = true)]
    man: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "cc-review", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    if cli.man {
        return match clap_mangen::Man::new(Cli::command()).render(&mut std::io::stdout()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{} {}", "Failed to render man page:".red(), e);
                ExitCode::FAILURE
            }
        };
    }

    println!("{} - Code Review Tool\n", "cc-review".bold().cyan());
    println!("{}", "Fetching diff...".dimmed());

    match DiffSource::new(&cli.repo).review(cli.reference.as_deref()) {
        Ok(diff) => {
            print!("{}", render::format_review(&diff));
            println!("\n{} Review complete!", "✓".green());
            ExitCode::SUCCESS
        }
        Err(ReviewError::NoChanges { reference }) => {
            log::debug!("empty diff against {reference}");
            println!("{}", "No changes to review!".yellow());
            ExitCode::SUCCESS
        }
        Err(ReviewError::DiffExitError { stderr }) => {
            eprintln!("{} {}", "Error running git diff:".red(), stderr.trim_end());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}
