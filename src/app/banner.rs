//! Startup banner.

use std::io::{self, Write};

use colored::*;

use crate::config::AUTHOR_CREDIT;

const ASCII_ART: &str = r"
d8888b. d88888b  .o88b. .d8888.  .o88b.  .d8b.  d8b   db
88  `8D 88'     d8P  Y8 88'  YP d8P  Y8 d8' `8b 888o  88
88oobY' 88ooooo 8P      `8bo.   8P      88ooo88 88V8o 88
88`8b   88~~~~~ 8b        `Y8b. 8b      88~~~88 88 V8o88
88 `88. 88.     Y8b  d8 db   8D Y8b  d8 88   88 88  V888
88   YD Y88888P  `Y88P' `8888Y'  `Y88P' YP   YP VP   V8P
";

const RAINBOW: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
];

/// Prints the rainbow ASCII art followed by the welcome and credit lines.
pub fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    // Colour index runs across the whole art, not per line
    let mut index = 0usize;
    for line in ASCII_ART.lines() {
        let mut colored_line = String::new();
        for ch in line.chars() {
            colored_line.push_str(&ch.to_string().color(RAINBOW[index % RAINBOW.len()]).to_string());
            index += 1;
        }
        writeln!(out, "{colored_line}")?;
    }
    writeln!(out, "{}", "Welcome to RecScan - DNS Record Checker\n".yellow())?;
    writeln!(out, "{}", format!("{AUTHOR_CREDIT}\n").green())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_contains_welcome_and_credit() {
        let mut out = Vec::new();
        render_banner(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Welcome to RecScan"));
        assert!(text.contains(AUTHOR_CREDIT));
    }

    #[test]
    fn test_banner_has_one_line_per_art_line() {
        let mut out = Vec::new();
        render_banner(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().count() >= ASCII_ART.lines().count());
    }
}
