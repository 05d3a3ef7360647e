//! Line-based terminal input and output.

use std::io::{self, BufRead, Write};

use game_core::GameError;

/// Prompts and menus over any reader/writer pair.
///
/// Reads return `None` once input is exhausted, which callers treat as a
/// request to leave the current menu.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Prints a prompt and reads one trimmed line.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Shows numbered options and reads a choice, re-prompting until the
    /// answer is a number in range.
    ///
    /// Returns the 0-based index of the chosen option.
    pub fn choose<S: AsRef<str>>(&mut self, title: &str, options: &[S]) -> io::Result<Option<usize>> {
        if options.is_empty() {
            return Ok(None);
        }

        self.say(format_args!("\n=== {title} ==="))?;
        for (index, option) in options.iter().enumerate() {
            self.say(format_args!("{}. {}", index + 1, option.as_ref()))?;
        }

        loop {
            let Some(answer) = self.read_line(&format!("Choose (1-{}): ", options.len()))? else {
                return Ok(None);
            };
            match answer.parse::<usize>() {
                Ok(choice) if (1..=options.len()).contains(&choice) => return Ok(Some(choice - 1)),
                _ => self.say("Invalid input. Please enter a number from the list.")?,
            }
        }
    }

    /// Prints an error with its category.
    pub fn report(&mut self, error: &impl GameError) -> io::Result<()> {
        tracing::warn!(code = error.error_code(), "{error}");
        self.say(format_args!("[{} error] {error}", error.category().as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn choose_reprompts_until_valid() {
        let mut console = console("zero\n0\n4\n2\n");

        let choice = console.choose("Menu", &["a", "b", "c"]).unwrap();

        assert_eq!(choice, Some(1));
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Invalid input").count(), 3);
    }

    #[test]
    fn exhausted_input_is_none() {
        let mut console = console("");
        assert_eq!(console.read_line("> ").unwrap(), None);
        assert_eq!(console.choose("Menu", &["a"]).unwrap(), None);
    }

    #[test]
    fn read_line_trims() {
        let mut console = console("  Hero  \n");
        assert_eq!(console.read_line("Name: ").unwrap().as_deref(), Some("Hero"));
    }
}
