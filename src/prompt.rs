use std::error::Error;
use std::io::{self, BufRead, Write};

/// Source of answers for interactive prompts. `None` means the user ended
/// input (EOF at the terminal), which callers treat as a cancelled run.
pub trait Prompter {
    fn ask(&mut self, prompt: &str, default: &str) -> io::Result<Option<String>>;
}

/// Reads answers from stdin, echoing the prompt and default to stdout.
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn ask(&mut self, prompt: &str, default: &str) -> io::Result<Option<String>> {
        print!("{prompt}: [{default}] ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim();
        Ok(Some(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        }))
    }
}

/// Ask for an integer. Empty input falls back to `default`; anything that
/// does not parse is a hard error, not a retry.
pub fn get_number(
    prompter: &mut dyn Prompter,
    prompt: &str,
    default: i64,
) -> Result<Option<i64>, Box<dyn Error>> {
    let Some(answer) = prompter.ask(prompt, &default.to_string())? else {
        return Ok(None);
    };
    let number = answer
        .parse::<i64>()
        .map_err(|_| "That is not a number.")?;
    Ok(Some(number))
}

/// Ask a yes/no question. Only `y`/`yes` (any case) count as yes.
pub fn get_boolean(
    prompter: &mut dyn Prompter,
    prompt: &str,
    default: &str,
) -> Result<Option<bool>, Box<dyn Error>> {
    let Some(answer) = prompter.ask(prompt, default)? else {
        return Ok(None);
    };
    Ok(Some(matches!(
        answer.to_lowercase().as_str(),
        "y" | "yes"
    )))
}

/// Scripted prompter for tests; hands out canned answers in order and
/// reports EOF when they run out.
#[cfg(test)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, _prompt: &str, default: &str) -> io::Result<Option<String>> {
        Ok(self.answers.pop_front().map(|answer| {
            if answer.is_empty() {
                default.to_string()
            } else {
                answer
            }
        }))
    }
}
