//! Shell completion infrastructure for casegen.
//!
//! Generates completion scripts for bash, zsh, and fish. The command tree is
//! mirrored here for `clap_complete`; keep it in sync with `main.rs` when
//! commands change.

use crate::error::{CasegenError, Result};
use clap::Command;
use clap_complete::{generate, Shell};

/// Shells a completion script can be generated for.
pub const SUPPORTED_SHELLS: [&str; 3] = ["bash", "zsh", "fish"];

/// Supported shell types for completion scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    /// Resolve a shell name given on the command line.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            "fish" => Ok(ShellType::Fish),
            _ => Err(CasegenError::ShellCompletion(format!(
                "Unsupported shell: '{}'",
                name
            ))),
        }
    }

    /// Convert to the `clap_complete::Shell` type.
    pub fn to_clap_shell(self) -> Shell {
        match self {
            ShellType::Bash => Shell::Bash,
            ShellType::Zsh => Shell::Zsh,
            ShellType::Fish => Shell::Fish,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Build the clap Command structure for completion generation.
fn build_cli() -> Command {
    Command::new("casegen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn user stories into test-case generation requests, prefilled from JIRA")
        .subcommand(
            Command::new("fetch")
                .about("Fetch a JIRA issue and show its prefill fields")
                .arg(clap::Arg::new("key").help("Issue key, e.g. PROJ-123"))
                .arg(
                    clap::Arg::new("json")
                        .long("json")
                        .help("Print the reshaped issue as JSON")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("extract")
                .about("Extract the acceptance-criteria section from text")
                .arg(
                    clap::Arg::new("file")
                        .help("File to read (stdin when omitted)")
                        .value_hint(clap::ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("prepare")
                .about("Validate and normalize a generation request file")
                .arg(
                    clap::Arg::new("file")
                        .help("Path to the request JSON file")
                        .value_hint(clap::ValueHint::FilePath),
                )
                .arg(
                    clap::Arg::new("issue")
                        .long("issue")
                        .help("Prefill from this JIRA issue before validating"),
                ),
        )
        .subcommand(
            Command::new("testdata")
                .about("Generate rows of random test data")
                .arg(
                    clap::Arg::new("field")
                        .short('f')
                        .long("field")
                        .help("Field as name[:type], repeatable")
                        .action(clap::ArgAction::Append),
                )
                .arg(
                    clap::Arg::new("rows")
                        .short('r')
                        .long("rows")
                        .help("Number of rows to generate")
                        .default_value("5"),
                ),
        )
        .subcommand(Command::new("config").about("Show the resolved JIRA settings"))
}

/// Generate a completion script for the specified shell.
pub fn generate_completion_script(shell: ShellType) -> String {
    let mut cmd = build_cli();
    let mut buf = Vec::new();
    generate(shell.to_clap_shell(), &mut cmd, "casegen", &mut buf);
    String::from_utf8(buf).unwrap_or_default()
}

/// Print a completion script to stdout.
pub fn print_completion_script(shell: ShellType) {
    print!("{}", generate_completion_script(shell));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_accepts_supported_shells() {
        assert_eq!(ShellType::from_name("bash").unwrap(), ShellType::Bash);
        assert_eq!(ShellType::from_name("zsh").unwrap(), ShellType::Zsh);
        assert_eq!(ShellType::from_name("fish").unwrap(), ShellType::Fish);
    }

    #[test]
    fn test_from_name_rejects_unknown_shell() {
        let err = ShellType::from_name("tcsh").unwrap_err().to_string();
        assert!(err.contains("tcsh"));
    }

    #[test]
    fn test_supported_shells_match_from_name() {
        for name in SUPPORTED_SHELLS {
            assert_eq!(ShellType::from_name(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_generated_scripts_mention_commands() {
        for shell in [ShellType::Bash, ShellType::Zsh, ShellType::Fish] {
            let script = generate_completion_script(shell);
            assert!(!script.is_empty(), "{} script empty", shell);
            assert!(script.contains("casegen"), "{} script missing name", shell);
            assert!(script.contains("testdata"), "{} script missing cmd", shell);
        }
    }
}
