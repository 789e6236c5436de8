// Colored terminal output for keyword rankings.
//
// Bars are scaled against the highest score shown, so the top keyword
// always fills the bar and the rest read as fractions of it.

use std::path::Path;

use colored::Colorize;

use crate::embeddings::VectorTable;
use crate::keywords::Keywords;

const BAR_WIDTH: usize = 20;
const TERM_WIDTH: usize = 30;

/// Display the `top` most central keywords as a bar chart.
pub fn display_keywords(keywords: &Keywords, top: usize) {
    if keywords.is_empty() {
        println!("No keywords found. Are the document's words in the vector file?");
        return;
    }

    let shown = keywords.top(top);
    println!(
        "\n{}",
        format!(
            "=== Top {} of {} keywords (embedding centrality) ===",
            shown.len(),
            keywords.len()
        )
        .bold()
    );
    println!();

    let scores: Vec<(String, f64)> = shown
        .iter()
        .map(|(term, rank)| (term.to_string(), *rank))
        .collect();
    print_bars(&scores);
}

/// Display fallback co-occurrence keywords as a bar chart.
pub fn display_baseline(ranked: &[(String, f32)]) {
    if ranked.is_empty() {
        println!("No keywords found.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Top {} keywords (co-occurrence TextRank) ===",
            ranked.len()
        )
        .bold()
    );
    println!();

    let scores: Vec<(String, f64)> = ranked
        .iter()
        .map(|(term, score)| (term.clone(), *score as f64))
        .collect();
    print_bars(&scores);
}

/// Display size and dimension of a loaded vector table.
pub fn display_vector_stats(path: &Path, table: &VectorTable) {
    println!("\n{}", "=== Word vectors ===".bold());
    println!("  File: {}", path.display());
    println!("  Vocabulary: {} words", table.len());
    println!("  Dimension: {}", table.dimension());
    if table.is_empty() {
        println!("  {} no usable vectors in this file", "Warning:".yellow());
    }
}

fn print_bars(scores: &[(String, f64)]) {
    let max = scores
        .iter()
        .map(|(_, s)| *s)
        .fold(0.0_f64, f64::max);

    for (i, (term, score)) in scores.iter().enumerate() {
        let fraction = if max > 0.0 { score / max } else { 0.0 };
        let filled = (fraction * BAR_WIDTH as f64).round() as usize;
        let empty = BAR_WIDTH.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        let colored_bar = if fraction >= 0.75 {
            bar.bright_green()
        } else if fraction >= 0.4 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>3}. {:<width$} {} {:.4}",
            i + 1,
            super::truncate_chars(term, TERM_WIDTH).bold(),
            colored_bar,
            score,
            width = TERM_WIDTH + 3,
        );
    }
    println!();
}
