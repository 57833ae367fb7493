//! Display functions for command results

use super::formatters::{create_progress_bar, format_duration, hearts};
use crate::commands::{BenchmarkResult, GeneratedPuzzle, PathResult};
use crate::game::{LadderSession, Rarity, Status};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of a ladder search
pub fn print_path_result(result: &PathResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.from.to_uppercase().bright_yellow().bold(),
        result.to.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.path {
        Some(path) => {
            for (i, word) in path.words().iter().enumerate() {
                println!("  {}. {}", i.to_string().bright_black(), word.text().to_uppercase());
            }
            println!();
            println!(
                "{}",
                format!("✅ {} steps ({:.2}ms)", path.steps(), result.duration.as_secs_f64() * 1000.0)
                    .green()
                    .bold()
            );
        }
        None => {
            println!(
                "{}",
                format!("❌ No ladder connects {} and {}", result.from, result.to)
                    .red()
                    .bold()
            );
        }
    }
}

/// Print generated puzzles with a reference solution
pub fn print_puzzles(puzzles: &[GeneratedPuzzle]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATED PUZZLES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (i, generated) in puzzles.iter().enumerate() {
        let puzzle = &generated.puzzle;
        println!(
            "\n{}. {} → {}  {}",
            i + 1,
            puzzle.start.text().to_uppercase().bright_white().bold(),
            puzzle.target.text().to_uppercase().bright_white().bold(),
            Rarity::of(&puzzle.target).emoji()
        );

        match &generated.solution {
            Some(path) => println!("   {} steps: {}", path.steps(), path.to_string().bright_black()),
            None => println!("   {}", "no ladder (fallback puzzle)".yellow()),
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Generation:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.total_puzzles);
    println!(
        "   In range:         {}",
        format!("{}", result.in_range).green().bold()
    );
    println!(
        "   Out of range:     {}",
        format!("{}", result.out_of_range).yellow()
    );
    println!("   Unreachable:      {}", result.unreachable);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    println!("\n📈 {}", "Shortest ladder lengths:".bright_cyan().bold());
    let mut lengths: Vec<_> = result.distribution.iter().collect();
    lengths.sort_unstable();

    for (steps, &count) in lengths {
        let pct = (count as f64 / result.total_puzzles as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {steps}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print the end-of-game card for a finished session
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_session_summary<W: Write>(out: &mut W, session: &LadderSession<'_>) -> io::Result<()> {
    let puzzle = session.puzzle();

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    match session.status() {
        Status::Won => {
            writeln!(out, "{}", "    🎉 Splendid! 🎉".bright_green().bold())?;
            writeln!(
                out,
                "  {} → {}",
                puzzle.start.text().to_uppercase(),
                puzzle.target.text().to_uppercase()
            )?;
            writeln!(out, "  Your moves:    {}", session.moves())?;
            writeln!(out, "  Optimal path:  {}", session.optimal_steps())?;
            writeln!(out, "  Solve time:    {}", format_duration(session.elapsed()))?;
        }
        Status::Lost => {
            let rarity = Rarity::of(&puzzle.target);
            writeln!(out, "{}", "    😔 Game Over".red().bold())?;
            writeln!(out, "  The target word was:")?;
            writeln!(out, "  {}", puzzle.target.text().to_uppercase().red().bold())?;
            writeln!(out, "  Rarity:        {rarity} {}", rarity.emoji())?;
        }
        Status::Playing => {
            writeln!(out, "  In progress   {}", hearts(session.hearts()))?;
        }
    }
    writeln!(out, "{}", "═".repeat(60).bright_cyan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, Word};
    use crate::ladder::Puzzle;

    fn finished(steps: &[&str]) -> (Dictionary, Vec<String>) {
        let dictionary = Dictionary::from_slices(
            &["cold", "cord", "card", "ward", "warm", "word", "worm"],
            &[],
        )
        .unwrap();
        (dictionary, steps.iter().map(ToString::to_string).collect())
    }

    fn summary(dictionary: &Dictionary, steps: &[String]) -> String {
        let puzzle = Puzzle::new(Word::new("cold").unwrap(), Word::new("warm").unwrap());
        let mut session = LadderSession::new(dictionary, puzzle);
        for step in steps {
            session.set_row_content(step);
            session.submit_row().unwrap();
        }

        let mut out = Vec::new();
        print_session_summary(&mut out, &session).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn summary_for_win_shows_moves() {
        let (dictionary, steps) = finished(&["cord", "card", "ward", "warm"]);
        let text = summary(&dictionary, &steps);

        assert!(text.contains("Splendid"));
        assert!(text.contains("Your moves:    4"));
        assert!(text.contains("Optimal path:  4"));
    }

    #[test]
    fn summary_for_loss_reveals_target() {
        let (dictionary, steps) = finished(&["cord", "word", "cord", "word", "worm"]);
        let text = summary(&dictionary, &steps);

        assert!(text.contains("Game Over"));
        assert!(text.contains("WARM"));
        assert!(text.contains("Rarity:        Common"));
    }
}
