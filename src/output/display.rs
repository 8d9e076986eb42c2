//! Display functions for command results

use super::formatters::{BLOCK, remaining_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveReport};
use colored::Colorize;

/// Print the result of solving a puzzle
pub fn print_solve_result(report: &SolveReport, verbose: bool) {
    let crossword = &report.crossword;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Filling: {} grid, {} slots, {} words ({})",
        format!("{}x{}", crossword.width(), crossword.height())
            .bright_yellow()
            .bold(),
        crossword.variables().len(),
        crossword.words().len(),
        report.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    match report.grid() {
        Some(grid) => {
            println!();
            for line in grid.lines() {
                let styled: String = line
                    .chars()
                    .map(|c| {
                        if c == BLOCK {
                            c.to_string().bright_black().to_string()
                        } else {
                            c.to_string().bright_white().bold().to_string()
                        }
                    })
                    .collect();
                println!("   {styled}");
            }
        }
        None => {
            println!("\n{}", "No solution.".red().bold());
        }
    }

    let stats = &report.outcome.stats;
    if verbose {
        println!("\n📊 {}", "Search:".bright_cyan().bold());
        println!(
            "   Candidates:   {} → {} → {}",
            stats.initial_candidates,
            stats.after_node_consistency,
            if stats.arc_consistent {
                stats.after_arc_consistency.to_string()
            } else {
                "wiped out".to_string()
            }
        );
        println!("   Nodes:        {}", stats.nodes);
        println!("   Backtracks:   {}", stats.backtracks);
        println!("   Max depth:    {}", stats.max_depth);
        println!("   Time taken:   {:.3}s", report.duration.as_secs_f64());
    }

    if stats.budget_exhausted {
        println!(
            "{}",
            format!("⚠ Gave up after {} nodes", stats.nodes).yellow()
        );
    }

    if let Some(path) = &report.saved_to {
        println!("\n💾 Saved to {}", path.display().to_string().green());
    }
}

/// Print the result of puzzle analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE ANALYSIS:".bright_cyan().bold(),
        format!("{}x{}", result.width, result.height)
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} slots against {} words:",
        result.slots.len(),
        result.word_count
    );

    for slot in &result.slots {
        let after_arc = slot
            .after_arc_consistency
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        let alive = slot.after_arc_consistency.unwrap_or(slot.after_node_consistency);

        println!(
            "\n   {}",
            slot.variable.to_string().bright_white().bold()
        );
        println!(
            "     Candidates: [{}] {} → {} → {}",
            remaining_bar(alive, slot.initial, 20).green(),
            slot.initial,
            slot.after_node_consistency,
            after_arc
        );

        let neighbors: Vec<String> = slot.neighbors.iter().map(ToString::to_string).collect();
        if neighbors.is_empty() {
            println!("     Crosses:    {}", "nothing".bright_black());
        } else {
            println!("     Crosses:    {}", neighbors.join(", "));
        }
    }

    println!();
    for slot in result.impossible_slots() {
        println!(
            "{}",
            format!("❌ No word fits {}", slot.variable).red().bold()
        );
    }

    match result.total_after_arc_consistency() {
        Some(total) => println!(
            "{}",
            format!(
                "✅ Arc consistent: {} → {} candidates",
                result.total_after_node_consistency(),
                total
            )
            .green()
            .bold()
        ),
        None => println!(
            "{}",
            "❌ Arc consistency empties a domain: no fill exists"
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Grids tested:     {}", result.total_puzzles);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green().bold()
    );
    println!(
        "   No fill:          {}",
        format!("{}", result.unsolvable).yellow()
    );
    println!(
        "   Gave up:          {}",
        format!("{}", result.gave_up).red()
    );
    println!(
        "   Average nodes:    {}",
        format!("{:.1}", result.average_nodes).bright_yellow().bold()
    );
    println!("   Avg backtracks:   {:.1}", result.average_backtracks);
    println!("   Slowest grid:     {:.3}s", result.slowest.as_secs_f64());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Grids/second:     {:.1}", result.puzzles_per_second);
}
