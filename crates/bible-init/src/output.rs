//! Terminal output utilities

use console::style;

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print a horizontal rule in the given accent
pub fn rule(accent: Accent) {
    let line = "━".repeat(60);
    match accent {
        Accent::Blue => println!("{}", style(line).blue()),
        Accent::Green => println!("{}", style(line).green()),
    }
}

/// Accent color for banners and rules
#[derive(Debug, Clone, Copy)]
pub enum Accent {
    Blue,
    Green,
}

/// Print the boxed banner shown at the start and end of a run
pub fn banner(msg: &str, accent: Accent) {
    rule(accent);
    match accent {
        Accent::Blue => println!("  {}", style(msg).blue().bold()),
        Accent::Green => println!("  {}", style(msg).green().bold()),
    }
    rule(accent);
    println!();
}
