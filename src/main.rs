use clap::{Args, Parser, Subcommand};

use cppintro::{doubler, standard};

#[derive(Debug, Parser)]
#[command(name = "cppintro", about = "Small exercises from an introductory C++ course")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Print the name of a C++ language standard code
    Standard(StandardArgs),
    /// Read a number from stdin and print it doubled
    Double,
}

impl Default for Command {
    fn default() -> Self {
        Command::Standard(StandardArgs::default())
    }
}

#[derive(Debug, Clone, Default, Args)]
struct StandardArgs {
    /// Standard code such as 201703 or 201703L (overrides CPP_STANDARD_CODE)
    #[arg(long, value_parser = standard::parse_code)]
    code: Option<i64>,

    /// List every known standard instead
    #[arg(long)]
    list: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Standard(#[from] standard::StandardError),
    #[error(transparent)]
    Doubler(#[from] doubler::DoublerError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Standard(_) => 2,
            CliError::Doubler(_) | CliError::Io(_) => 1,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    let result = match args.command() {
        Command::Standard(args) => standard_command(&args),
        Command::Double => double_command(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn standard_command(args: &StandardArgs) -> Result<(), CliError> {
    if args.list {
        for standard in standard::STANDARDS {
            println!("{}\t{}", standard.code, standard);
        }
        return Ok(());
    }

    let code = match args.code {
        Some(code) => code,
        None => standard::configured_code()?.unwrap_or(standard::DEFAULT_CODE),
    };
    log::info!("Resolving standard code {code}");

    standard::report(code, &mut std::io::stdout().lock())?;
    Ok(())
}

fn double_command() -> Result<(), CliError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let doubled = doubler::run(stdin.lock(), stdout.lock())?;
    log::debug!("Doubled value {doubled}");
    Ok(())
}
