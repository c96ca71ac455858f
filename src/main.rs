//! casegen CLI entry point.
//!
//! Parses command-line arguments and dispatches to the appropriate command
//! handler.

use casegen::commands::{
    config_command, extract_command, fetch_command, prepare_command, testdata_command,
};
use casegen::completion::{print_completion_script, ShellType, SUPPORTED_SHELLS};
use casegen::output::print_error;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "casegen")]
#[command(
    version,
    about = "Turn user stories into test-case generation requests, prefilled from JIRA",
    after_help = "EXAMPLES:
    # Fetch an issue and show its prefill fields
    casegen fetch PROJ-123

    # Pull the acceptance-criteria section out of any text
    casegen extract story.txt
    pbpaste | casegen extract

    # Validate a request file, prefilled from an issue
    casegen prepare request.json --issue PROJ-123

    # Five rows of random test data
    casegen testdata -f customerName -f email:email -f signupDate:date"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a JIRA issue and show its prefill fields
    #[command(after_help = "EXAMPLES:
    casegen fetch PROJ-123           # Labeled sections
    casegen fetch PROJ-123 --json    # Reshaped issue as JSON

Without configured JIRA credentials, a clearly-marked mock issue is returned.
Run 'casegen config' to see the current settings.")]
    Fetch {
        /// Issue key, e.g. PROJ-123
        key: String,

        /// Print the reshaped issue as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract the acceptance-criteria section from text
    #[command(after_help = "EXAMPLES:
    casegen extract story.txt        # From a file
    cat story.txt | casegen extract  # From stdin

Exits with status 1 when no acceptance-criteria section is found.")]
    Extract {
        /// File to read (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Validate and normalize a generation request file
    #[command(after_help = "EXAMPLES:
    casegen prepare request.json                      # Validate and rewrite
    casegen prepare request.json --issue PROJ-123     # Prefill from JIRA first

The file is a camelCase JSON request: storyTitle, acceptanceCriteria,
description, additionalInfo, category, testcaseCount (1-20).")]
    Prepare {
        /// Path to the request JSON file
        file: PathBuf,

        /// Prefill from this JIRA issue before validating
        #[arg(long)]
        issue: Option<String>,
    },

    /// Generate rows of random test data
    #[command(after_help = "EXAMPLES:
    casegen testdata -f customerName -f email:email
    casegen testdata -f phoneNumber -f dob:date --rows 10

FIELD SYNTAX:
    name[:type] where type is one of: string, number, integer, decimal,
    email, phone, date, name, address. Without an explicit type, the type
    is inferred from the field name (e.g. 'phoneNumber' becomes phone).")]
    Testdata {
        /// Field as name[:type], repeatable
        #[arg(short, long = "field", required = true)]
        field: Vec<String>,

        /// Number of rows to generate
        #[arg(short, long, default_value_t = 5)]
        rows: usize,
    },

    /// Show the resolved JIRA settings
    Config,

    /// Output shell completion script to stdout (hidden utility command)
    #[command(hide = true)]
    Completions {
        /// Shell type to generate completions for (bash, zsh, or fish)
        shell: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Fetch { key, json } => fetch_command(key, *json),
        Commands::Extract { file } => extract_command(file.as_deref()),
        Commands::Prepare { file, issue } => prepare_command(file, issue.as_deref()),
        Commands::Testdata { field, rows } => testdata_command(field, *rows),
        Commands::Config => config_command(),
        Commands::Completions { shell } => match ShellType::from_name(shell) {
            Ok(shell_type) => {
                print_completion_script(shell_type);
                Ok(())
            }
            Err(e) => {
                print_error(&format!(
                    "{}\nSupported shells: {}",
                    e,
                    SUPPORTED_SHELLS.join(", ")
                ));
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
