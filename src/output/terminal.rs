// Colored terminal output for result pages, summaries and explanations.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here.

use colored::Colorize;

use crate::models::{Category, ScoredAccount};
use crate::query::QueryPage;
use crate::scoring::{Explanation, WeightVector};
use crate::signals::Feature;
use crate::summary::{CategoryCounts, ScoreBin};

use super::{bar, truncate_chars};

/// Display one page of the results table.
pub fn display_page(result: &QueryPage) {
    if result.total_matches == 0 {
        println!("No accounts match the current search and filter.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Detection Results ({} accounts) ===", result.total_matches).bold()
    );
    println!();
    println!(
        "  {:<32} {:>7}  {:<22}  {:<10}",
        "Username".dimmed(),
        "Score".dimmed(),
        "".dimmed(),
        "Category".dimmed(),
    );
    println!("  {}", "-".repeat(76).dimmed());

    for account in &result.page {
        println!(
            "  {:<32} {:>6.1}%  {:<22}  {}",
            truncate_chars(account.username(), 32),
            account.score(),
            bar(account.score(), 20),
            colorize_category(account.category()),
        );
    }

    println!();
    println!(
        "  {}",
        format!("Page {} of {}", result.page_number, result.total_pages).dimmed()
    );
}

/// Display the dashboard summary: counts, flagged list and histogram.
pub fn display_summary(counts: &CategoryCounts, flagged: &[&ScoredAccount], bins: &[ScoreBin]) {
    println!("\n{}", "=== Dashboard Overview ===".bold());
    println!();
    println!("  Total accounts:      {}", counts.total);
    for category in Category::ALL {
        println!(
            "  {:<20} {}",
            format!("{category}:"),
            counts.get(category)
        );
    }
    println!("  Flagged:             {}", counts.flagged());

    println!("\n  {}", "Suspicion score distribution".bold());
    let widest = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    for bin in bins {
        let width = bin.count * 30 / widest;
        println!("  {:>7}  {:<30} {}", bin.label, "#".repeat(width), bin.count);
    }

    if !flagged.is_empty() {
        println!("\n  {}", "Flagged accounts".bold());
        for account in flagged {
            println!(
                "    {:<32} {}",
                account.username(),
                colorize_category(account.category())
            );
        }
    }
}

/// Display a single account's score breakdown.
pub fn display_explanation(username: &str, explanation: &Explanation) {
    println!("\n{}", format!("=== Explanation for {username} ===").bold());
    println!(
        "  Suspicion score: {:.1}%  {}",
        explanation.score,
        colorize_category(explanation.category)
    );

    println!("\n  Contributions:");
    for c in &explanation.contributions {
        println!(
            "    {:<22} {:>5.1}%  {}  x{:.2} = {:>5.2}",
            c.feature.label(),
            c.value,
            bar(c.value, 20),
            c.weight,
            c.points
        );
    }

    let risky = explanation.high_risk_features();
    if risky.is_empty() {
        println!("\n  {}", "No high-risk characteristics.".green());
    } else {
        let names: Vec<String> = risky
            .iter()
            .map(|f| f.label().to_lowercase())
            .collect();
        println!(
            "\n  {} {}",
            "High-risk characteristics:".red(),
            names.join(", ")
        );
    }
}

/// Display the active weights as normalized shares.
pub fn display_weights(weights: &WeightVector, shares: &[(Feature, f64)]) {
    println!("\n{}", "=== Feature Weights ===".bold());
    for (feature, share) in shares {
        println!(
            "  {:<22} raw {:>6.3}  share {:>5.1}%",
            feature.label(),
            weights.get(*feature),
            share * 100.0
        );
    }
}

/// Colorize a category badge.
fn colorize_category(category: Category) -> colored::ColoredString {
    let label = category.as_str();
    match category {
        Category::Fake => label.red().bold(),
        Category::Suspicious => label.yellow(),
        Category::Genuine => label.green(),
    }
}
