//! Config command handler.
//!
//! Shows where settings come from and whether the JIRA connection is fully
//! configured. The API token is reported as set/not set, never echoed.

use crate::config;
use crate::error::Result;
use crate::output::{print_info, BOLD, DIM, GREEN, RESET, YELLOW};

pub fn config_command() -> Result<()> {
    let path = config::config_path()?;
    let settings = config::load_settings()?;

    println!("{BOLD}JIRA settings{RESET} {DIM}({}){RESET}", path.display());
    print_value("base_url", settings.base_url.as_deref());
    print_value("username", settings.username.as_deref());
    print_secret("api_token", settings.api_token.as_deref());
    println!();

    if settings.is_configured() {
        println!("{GREEN}Configured.{RESET} `casegen fetch` talks to JIRA.");
    } else {
        print_info("Not fully configured; `casegen fetch` returns mock issues.");
    }
    Ok(())
}

fn print_value(name: &str, value: Option<&str>) {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => println!("  {:<10} {}", name, v),
        None => println!("  {:<10} {YELLOW}(not set){RESET}", name),
    }
}

fn print_secret(name: &str, value: Option<&str>) {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(_) => println!("  {:<10} {GREEN}(set){RESET}", name),
        None => println!("  {:<10} {YELLOW}(not set){RESET}", name),
    }
}
