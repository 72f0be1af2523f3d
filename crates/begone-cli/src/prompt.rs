//! Credential prompters
//!
//! [`TtyPrompter`] asks on an interactive terminal through dialoguer, hiding
//! the password as it is typed. [`LinePrompter`] reads plain lines and serves
//! piped input; blank answers are asked again and end of input while a field
//! is still required is an error.

use std::io::{self, BufRead, Write};

use begone_core::{CredentialField, CredentialRecord, Prompter};
use dialoguer::console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

// ----------------------------------------------------------------------------
// Terminal Prompter
// ----------------------------------------------------------------------------

/// Interactive prompter drawing on stderr so stdout stays free for payloads
pub struct TtyPrompter {
    term: Term,
    theme: ColorfulTheme,
}

impl TtyPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: ColorfulTheme::default(),
        }
    }

    fn ask(&self, field: CredentialField) -> dialoguer::Result<String> {
        match field {
            CredentialField::Username => Input::<String>::with_theme(&self.theme)
                .with_prompt(label(field))
                .validate_with(|input: &String| require_non_empty(field, input))
                .interact_text_on(&self.term),
            CredentialField::Password => Password::with_theme(&self.theme)
                .with_prompt(label(field))
                .validate_with(|input: &String| require_non_empty(field, input))
                .interact_on(&self.term),
        }
    }
}

impl Default for TtyPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TtyPrompter {
    type Error = dialoguer::Error;

    fn query_missing(
        &mut self,
        mut record: CredentialRecord,
        force_prompt: bool,
    ) -> Result<CredentialRecord, Self::Error> {
        for field in CredentialField::ALL {
            if force_prompt || record.get(field).is_empty() {
                let answer = self.ask(field)?;
                record.set(field, answer);
            }
        }
        Ok(record)
    }
}

// ----------------------------------------------------------------------------
// Line Prompter
// ----------------------------------------------------------------------------

pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl LinePrompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompter reading from stdin and writing prompts to stderr
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for `field` until a non-blank answer is given
    fn ask(&mut self, field: CredentialField) -> io::Result<String> {
        loop {
            write!(self.output, "{}: ", label(field))?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("input closed before {field} was entered"),
                ));
            }

            let answer = line.trim_end_matches(['\r', '\n']);
            match require_non_empty(field, answer) {
                Ok(()) => return Ok(answer.to_string()),
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    type Error = io::Error;

    fn query_missing(
        &mut self,
        mut record: CredentialRecord,
        force_prompt: bool,
    ) -> Result<CredentialRecord, Self::Error> {
        for field in CredentialField::ALL {
            if force_prompt || record.get(field).is_empty() {
                let answer = self.ask(field)?;
                record.set(field, answer);
            }
        }
        Ok(record)
    }
}

fn label(field: CredentialField) -> &'static str {
    match field {
        CredentialField::Username => "Username",
        CredentialField::Password => "Password",
    }
}

fn require_non_empty(field: CredentialField, input: &str) -> Result<(), &'static str> {
    if !input.trim().is_empty() {
        return Ok(());
    }
    match field {
        CredentialField::Username => Err("Username cannot be empty"),
        CredentialField::Password => Err("Password cannot be empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter<'a>(
        input: &str,
        output: &'a mut Vec<u8>,
    ) -> LinePrompter<Cursor<Vec<u8>>, &'a mut Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), output)
    }

    #[test]
    fn test_blank_answers_fail_validation() {
        assert_eq!(
            require_non_empty(CredentialField::Password, "  "),
            Err("Password cannot be empty")
        );
        assert_eq!(
            require_non_empty(CredentialField::Username, ""),
            Err("Username cannot be empty")
        );
        assert_eq!(require_non_empty(CredentialField::Password, "secret"), Ok(()));
    }

    #[test]
    fn test_tty_prompter_skips_complete_records() {
        // Nothing is asked, so no terminal is needed
        let mut prompter = TtyPrompter::new();
        let record = prompter
            .query_missing(CredentialRecord::new("alice", "secret"), false)
            .unwrap();
        assert_eq!(record, CredentialRecord::new("alice", "secret"));
    }

    #[test]
    fn test_only_empty_fields_are_asked() {
        let mut output = Vec::new();
        let record = prompter("secret\n", &mut output)
            .query_missing(CredentialRecord::new("alice", ""), false)
            .unwrap();

        assert_eq!(record, CredentialRecord::new("alice", "secret"));
        assert_eq!(String::from_utf8(output).unwrap(), "Password: ");
    }

    #[test]
    fn test_complete_record_is_untouched() {
        let mut output = Vec::new();
        let record = prompter("", &mut output)
            .query_missing(CredentialRecord::new("alice", "secret"), false)
            .unwrap();

        assert_eq!(record, CredentialRecord::new("alice", "secret"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_force_prompt_asks_everything() {
        let mut output = Vec::new();
        let record = prompter("bob\r\nhunter2\n", &mut output)
            .query_missing(CredentialRecord::new("alice", "secret"), true)
            .unwrap();
        assert_eq!(record, CredentialRecord::new("bob", "hunter2"));
    }

    #[test]
    fn test_blank_answers_are_asked_again() {
        let mut output = Vec::new();
        let record = prompter("\n   \nalice\npw\n", &mut output)
            .query_missing(CredentialRecord::default(), false)
            .unwrap();

        assert_eq!(record, CredentialRecord::new("alice", "pw"));
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("Username cannot be empty").count(), 2);
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut output = Vec::new();
        let err = prompter("alice\n", &mut output)
            .query_missing(CredentialRecord::default(), false)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
