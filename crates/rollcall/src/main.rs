use clap::{Parser, Subcommand};
use models::StudentForm;
use rollcall_lib::handlers;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "rollcall",
    about = "Student registration form validator",
    version,
    long_about = "Validates student registration forms: full name, age, birthday and parents' name.\n\nExamples:\n  rollcall check --name \"John Doe\" --age 10 --birthday 05/15/2014 --guardian \"Jane Doe\"\n  rollcall check --age 0 --all            # Report every failing field\n  rollcall validate rosters/              # Validate every roster file in a directory\n  rollcall --debug validate class.yml     # Validate with detailed logs"
)]
struct Rollcall {
    #[command(subcommand)]
    command: Commands,

    /// Run in verbose mode with detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run in debug mode with extensive details
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a single registration form
    Check {
        /// Student's full name
        #[arg(long)]
        name: Option<String>,

        /// Student's age, a whole number from 1 to 150
        #[arg(long, allow_hyphen_values = true)]
        age: Option<String>,

        /// Student's birthday
        #[arg(long)]
        birthday: Option<String>,

        /// Parents' or guardian's name
        #[arg(long)]
        guardian: Option<String>,

        /// Report every failing field instead of only the first
        #[arg(short, long)]
        all: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate roster files (YAML or JSON lists of registration forms)
    Validate {
        /// Path to a roster file or a directory of rosters (defaults to ./rosters)
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Rollcall::parse();
    let verbose = cli.verbose;

    logging::init(verbose, cli.debug);
    logging::debug("Debug mode enabled - showing detailed logs");

    match cli.command {
        Commands::Check {
            name,
            age,
            birthday,
            guardian,
            all,
            json,
        } => {
            let form = StudentForm {
                full_name: name,
                age,
                birthday,
                guardian_name: guardian,
            };

            let outcome = handlers::check_form(&form, all);
            match outcome.render(json) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }

            if !outcome.is_valid() {
                std::process::exit(1);
            }
        }

        Commands::Validate { path } => {
            let validate_path = handlers::roster_path(path);
            logging::info(&format!("Validating rosters in {}", validate_path.display()));

            match handlers::validate_rosters(&validate_path, verbose) {
                Ok(summary) if summary.has_failures() => std::process::exit(1),
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
