//! Simple interactive CLI mode
//!
//! Text-based ladder game without TUI

use crate::core::Dictionary;
use crate::game::{LadderSession, Outcome, Status};
use crate::ladder::GeneratorConfig;
use crate::output::display::print_session_summary;
use crate::output::formatters::{hearts, spaced_letters};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(dictionary, config, rng, stdin.lock(), stdout.lock())
        .map(|_wins| ())
        .map_err(|e| e.to_string())
}

/// Drive games from line input
///
/// Each line is either a word to submit or one of the `:` commands.
/// Returns the number of puzzles won.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `out`.
pub fn play_lines<R, I, O>(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    rng: &mut R,
    input: I,
    mut out: O,
) -> io::Result<usize>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Ladder - Interactive Mode               ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Change exactly one letter per step to reach the target word.")?;
    writeln!(out, "Commands: ':hint', ':clear', ':new', ':quit'\n")?;

    let mut session = LadderSession::generate(dictionary, rng, config);
    let mut wins = 0;
    print_board(&mut out, &session)?;

    for line in input.lines() {
        let line = line?;
        let entry = line.trim().to_lowercase();

        match entry.as_str() {
            "" if session.current_text().is_empty() => continue,
            ":quit" | ":q" | ":exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(wins);
            }
            ":new" | ":n" => {
                session = LadderSession::generate(dictionary, rng, config);
                writeln!(out, "\n🔄 New puzzle!\n")?;
            }
            ":clear" | ":c" => {
                session.clear();
                writeln!(out, "Ladder cleared.")?;
            }
            ":hint" | ":h" => match session.hint() {
                Ok(word) => writeln!(
                    out,
                    "💡 Try {} (press Enter to use it)",
                    word.text().to_uppercase()
                )?,
                Err(e) => writeln!(out, "❌ {e}")?,
            },
            word => {
                // An empty line submits whatever is staged, such as a hint
                if !word.is_empty() {
                    session.set_row_content(word);
                }
                match session.submit_row() {
                    Ok(Outcome::Advanced { .. }) => {}
                    Ok(Outcome::Won | Outcome::Lost) => {
                        if session.status() == Status::Won {
                            wins += 1;
                        }
                        print_session_summary(&mut out, &session)?;
                        session = LadderSession::generate(dictionary, rng, config);
                        writeln!(out, "\n🔄 Next puzzle!\n")?;
                    }
                    Err(e) => writeln!(out, "❌ {e}")?,
                }
            }
        }

        print_board(&mut out, &session)?;
    }

    Ok(wins)
}

fn print_board<O: Write>(out: &mut O, session: &LadderSession<'_>) -> io::Result<()> {
    let width = session.dictionary().word_length();
    let puzzle = session.puzzle();

    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "{} → {}   {}",
        puzzle.start.text().to_uppercase(),
        puzzle.target.text().to_uppercase(),
        hearts(session.hearts())
    )?;
    writeln!(out, "   {}", spaced_letters(puzzle.start.text(), width))?;
    for (i, row) in session.rows().iter().enumerate() {
        let marker = if i == session.current_row() { '▶' } else { ' ' };
        writeln!(out, " {marker} {}", spaced_letters(row, width))?;
    }
    writeln!(out, "   {}", spaced_letters(puzzle.target.text(), width))?;
    write!(out, "Step {}: ", session.current_row() + 1)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn scenario() -> Dictionary {
        let words = &["cold", "cord", "card", "ward", "warm", "corn"];
        Dictionary::from_slices(words, &["cold", "warm"]).unwrap()
    }

    #[test]
    fn hint_is_staged() {
        let dictionary = scenario();
        let mut rng = StdRng::seed_from_u64(0);

        let script = ":hint\n";
        let mut output = Vec::new();
        let wins = play_lines(
            &dictionary,
            &GeneratorConfig::default(),
            &mut rng,
            script.as_bytes(),
            &mut output,
        )
        .unwrap();

        assert_eq!(wins, 0);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("💡 Try"));
    }

    #[test]
    fn quit_stops_reading() {
        let dictionary = scenario();
        let mut rng = StdRng::seed_from_u64(0);
        let mut output = Vec::new();

        let wins = play_lines(
            &dictionary,
            &GeneratorConfig::default(),
            &mut rng,
            ":quit\nxxxx\n".as_bytes(),
            &mut output,
        )
        .unwrap();

        assert_eq!(wins, 0);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Thanks for playing"));
        assert!(!text.contains("Not in word list"));
    }

    #[test]
    fn invalid_word_reports_error() {
        let dictionary = scenario();
        let mut rng = StdRng::seed_from_u64(0);
        let mut output = Vec::new();

        play_lines(
            &dictionary,
            &GeneratorConfig::default(),
            &mut rng,
            "xxxx\nco\n".as_bytes(),
            &mut output,
        )
        .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Not in word list"));
        assert!(text.contains("Not enough letters"));
    }

    #[test]
    fn accepting_hints_wins() {
        let dictionary = scenario();
        let mut rng = StdRng::seed_from_u64(0);

        // Hints keep the ladder valid whichever direction was generated
        let script = ":hint\n\n:hint\n\n:hint\n\n:hint\n\n";
        let mut output = Vec::new();
        let wins = play_lines(
            &dictionary,
            &GeneratorConfig::default(),
            &mut rng,
            script.as_bytes(),
            &mut output,
        )
        .unwrap();

        assert_eq!(wins, 1);
    }
}
