/* src/cli/core/src/ui.rs */

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn ok(msg: &str) {
  println!("  {GREEN}\u{2713}{RESET} {msg}");
}

pub fn arrow(msg: &str) {
  println!("  {GREEN}\u{2192}{RESET} {msg}");
}

/// Warnings go to stderr; stdout may be piped (`sample`).
pub fn warn(msg: &str) {
  eprintln!("  {YELLOW}!{RESET} {msg}");
}

pub fn detail_ok(msg: &str) {
  println!("        {GREEN}\u{2713}{RESET} {msg}");
}

pub fn banner(cmd: &str, subtitle: Option<&str>) {
  println!();
  match subtitle {
    Some(sub) => println!("  {BOLD}SeamJS sitemap{RESET} {cmd} {DIM}v{VERSION} \u{00b7} {sub}{RESET}"),
    None => println!("  {BOLD}SeamJS sitemap{RESET} {cmd} {DIM}v{VERSION}{RESET}"),
  }
  println!();
}

pub fn format_size(bytes: u64) -> String {
  if bytes >= 1_000_000 {
    format!("{:.1} MB", bytes as f64 / 1_000_000.0)
  } else if bytes >= 1_000 {
    format!("{:.1} kB", bytes as f64 / 1_000.0)
  } else {
    format!("{bytes} B")
  }
}
