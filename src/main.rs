mod commands;
mod core;

use clap::Parser;
use crate::core::config::SyncConfig;
use crate::core::error::{SyncError, print_error};

/// Keep a project's version string in sync across its version file and source markers
#[derive(Parser)]
#[command(name = "versync")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct SyncCli {
  /// New version string, including the leading tag (e.g. v6.7). Prompted for when omitted.
  new_version: Option<String>,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = SyncCli::parse();

  // All three files live next to each other in the project root; the tool is
  // run from there, so resolve them against the current directory
  let project_root = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("Error: Failed to get current directory: {}", e);
      std::process::exit(1);
    }
  };

  let config = SyncConfig::from_root(&project_root);

  if let Err(err) = commands::run_sync(&config, cli.new_version) {
    handle_error(err);
  }
}

fn handle_error(err: SyncError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
