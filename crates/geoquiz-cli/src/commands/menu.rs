//! The `geoquiz menu` command, also the default when no command is given.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use geoquiz_core::config::load_config_from;
use geoquiz_core::traits::{Console, LineConsole};
use geoquiz_core::QuizError;

use super::play::{load_catalog, play_session};

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let mut console = LineConsole::new(io::stdin().lock(), io::stdout());

    loop {
        print_menu(&mut console)?;
        let line = match console.read_line("Your choice: ") {
            Ok(line) => line,
            Err(QuizError::InputClosed) => {
                console.blank()?;
                break;
            }
            Err(e) => return Err(e.into()),
        };

        match line.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('W') => {
                let started = load_catalog(&config)
                    .and_then(|catalog| play_session(&config, &catalog, &mut console));
                if let Err(e) = started {
                    if let Some(QuizError::InputClosed) = e.downcast_ref::<QuizError>() {
                        return Err(e);
                    }
                    console.say(&format!("Error: could not start Word game ({e:#})."))?;
                    console.blank()?;
                }
            }
            Some('Q') => break,
            _ => {
                console.say("Invalid input. Please enter W or Q.")?;
                console.blank()?;
            }
        }
    }

    console.say("Goodbye.")?;
    Ok(())
}

fn print_menu(console: &mut dyn Console) -> Result<()> {
    console.say("=== Main Menu ===")?;
    console.say("Press W to play the Word game.")?;
    console.say("Press Q to quit.")?;
    Ok(())
}
