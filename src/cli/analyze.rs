//! Analyze command - show the character frequency ranking of a text

use anyhow::Result;
use caesar::frequency::character_counts;
use console::style;

/// Print the ranking with counts, most frequent first
pub fn run(text: &str, top: Option<usize>) -> Result<()> {
    let counts = character_counts(text);
    if counts.is_empty() {
        println!("{}", style("No shiftable characters in input").yellow());
        return Ok(());
    }

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let limit = top.unwrap_or(counts.len());

    println!(
        "{} {} distinct characters, {} shiftable in total\n",
        style("📊").bold(),
        counts.len(),
        total
    );
    for (rank, (c, n)) in counts.iter().take(limit).enumerate() {
        println!(
            "  {:>3}. {:<7} {:>6}  {:>5.1}%",
            rank + 1,
            style(display_char(*c)).cyan(),
            n,
            *n as f64 * 100.0 / total as f64
        );
    }
    if limit < counts.len() {
        println!("  ... {} more", counts.len() - limit);
    }
    Ok(())
}

fn display_char(c: char) -> String {
    if c == ' ' {
        "<space>".to_string()
    } else {
        format!("'{}'", c)
    }
}
