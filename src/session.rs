//! Message sessions: settings lines and messages processed in order.
//!
//! Input is read line by line. A line starting with `*` reconfigures the
//! machine (see [`SettingLine`]), a blank line is echoed, and any other
//! line is a message that is converted and written in groups of five
//! symbols.

use crate::config::{ParseError, SettingLine};
use crate::enforcement::{EnforcementRules, SlotContext, ViolationError, ViolationStrategy};
use crate::machine::{ConvertError, Machine};
use stillwater::validation::Validation;
use thiserror::Error;

/// Errors that stop a session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("No configuration: a settings line must precede the first message")]
    NoConfiguration,

    #[error("Rotor layout rejected: {}", describe(.0))]
    Violations(Vec<ViolationError>),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

fn describe(violations: &[ViolationError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Drives a machine over a stream of settings lines and messages.
///
/// # Example
///
/// ```rust
/// use enigma::builder::historical_machine;
/// use enigma::session::Session;
///
/// let mut session = Session::new(historical_machine());
/// let output = session
///     .process("* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)\nFROM HIS SHOULDER HIAWATHA\n")
///     .unwrap();
/// assert_eq!(output, "QVPQS OKOIL PUBKJ ZPISF XDW\n");
/// ```
#[derive(Debug)]
pub struct Session {
    machine: Machine,
    rules: Option<EnforcementRules>,
    configured: bool,
}

impl Session {
    pub fn new(machine: Machine) -> Self {
        Self {
            machine,
            rules: None,
            configured: false,
        }
    }

    /// Check every settings line against `rules` before it takes effect.
    pub fn with_rules(mut self, rules: EnforcementRules) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Whether a settings line has been applied yet.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Process every line of `input`, returning the output text.
    ///
    /// Each blank or message line yields one output line; settings lines
    /// yield none.
    pub fn process(&mut self, input: &str) -> Result<String, SessionError> {
        let mut output = String::new();
        for (number, line) in input.lines().enumerate() {
            if let Some(text) = self.process_line(line).inspect_err(|err| {
                tracing::debug!(line = number + 1, error = %err, "session stopped");
            })? {
                output.push_str(&text);
                output.push('\n');
            }
        }
        Ok(output)
    }

    /// Process one line, returning the text to emit for it, if any.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>, SessionError> {
        if line.trim().is_empty() {
            return Ok(Some(String::new()));
        }
        if line.trim_start().starts_with('*') {
            self.configure(line)?;
            return Ok(None);
        }
        if !self.configured {
            return Err(SessionError::NoConfiguration);
        }
        let converted = self.machine.convert(line)?;
        Ok(Some(group_in_fives(&converted)))
    }

    fn configure(&mut self, line: &str) -> Result<(), SessionError> {
        let settings = SettingLine::parse(line, self.machine.num_rotors())?;
        let mut staged = self.machine.clone();
        settings.apply(&mut staged)?;

        if let Some(rules) = &self.rules {
            if let Validation::Failure(errors) = rules.enforce(&SlotContext::from_machine(&staged)) {
                match rules.violation_strategy() {
                    ViolationStrategy::Abort => {
                        return Err(SessionError::Violations(errors.iter().cloned().collect()));
                    }
                    ViolationStrategy::IgnoreAndLog => {
                        for violation in errors.iter() {
                            tracing::warn!(%violation, "ignoring rotor layout violation");
                        }
                    }
                }
            }
        }

        self.machine = staged;
        self.configured = true;
        Ok(())
    }
}

/// Drop whitespace from `msg` and split the rest into space-separated
/// groups of five symbols; the last group may be shorter.
///
/// ```rust
/// use enigma::session::group_in_fives;
///
/// assert_eq!(group_in_fives("QVPQ SOK OILPUBKJ"), "QVPQS OKOIL PUBKJ");
/// assert_eq!(group_in_fives("AB"), "AB");
/// ```
pub fn group_in_fives(msg: &str) -> String {
    let symbols: Vec<char> = msg.chars().filter(|c| !c.is_whitespace()).collect();
    symbols
        .chunks(5)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::historical_machine;
    use crate::enforcement::EnforcementBuilder;

    #[test]
    fn groups_in_fives() {
        assert_eq!(group_in_fives(""), "");
        assert_eq!(group_in_fives("ABCDE"), "ABCDE");
        assert_eq!(group_in_fives("ABCDEF"), "ABCDE F");
        assert_eq!(group_in_fives(" A B\tC DEFGHIJ "), "ABCDE FGHIJ");
    }

    #[test]
    fn message_before_settings_is_rejected() {
        let mut session = Session::new(historical_machine());
        assert_eq!(
            session.process("HELLO\n"),
            Err(SessionError::NoConfiguration)
        );
        assert!(!session.is_configured());
    }

    #[test]
    fn blank_lines_are_echoed() {
        let mut session = Session::new(historical_machine());
        let output = session
            .process("* B Beta I II III AAAA\nHELLO WORLD\n\n   \nILBDA\n")
            .unwrap();
        assert_eq!(output, "ILBDA AMTAZ\n\n\nBRAFM\n");
    }

    #[test]
    fn settings_lines_reset_the_machine() {
        let mut session = Session::new(historical_machine());
        let output = session
            .process("* B Beta I II III AAAA\nHELLO WORLD\n* B Beta I II III AAAA\nILBDA AMTAZ\n")
            .unwrap();
        assert_eq!(output, "ILBDA AMTAZ\nHELLO WORLD\n");
    }

    #[test]
    fn conversion_errors_stop_the_session() {
        let mut session = Session::new(historical_machine());
        assert_eq!(
            session.process("* B Beta I II III AAAA\nHELLO, WORLD\n"),
            Err(SessionError::Convert(ConvertError::InvalidCharacter(',')))
        );
    }

    #[test]
    fn abort_strategy_rejects_bad_layouts() {
        let rules = EnforcementBuilder::standard().build();
        let mut session = Session::new(historical_machine()).with_rules(rules);

        let err = session
            .process("* B I Beta II III AAAA\n")
            .unwrap_err();
        match err {
            SessionError::Violations(violations) => assert_eq!(violations.len(), 2),
            other => panic!("expected violations, got {other:?}"),
        }
        assert!(!session.is_configured());
        assert!(session.machine().rotor_slots().is_empty());
    }

    #[test]
    fn ignore_strategy_keeps_bad_layouts() {
        let rules = EnforcementBuilder::standard()
            .on_violation(ViolationStrategy::IgnoreAndLog)
            .build();
        let mut session = Session::new(historical_machine()).with_rules(rules);

        session.process("* B I Beta II III AAAA\n").unwrap();
        assert!(session.is_configured());
        assert_eq!(
            session.machine().rotor_names(),
            vec!["B", "I", "Beta", "II", "III"]
        );
    }

    #[test]
    fn violation_message_lists_every_problem() {
        let err = SessionError::Violations(vec![
            ViolationError::CustomCheckFailed {
                message: "one".to_string(),
            },
            ViolationError::CustomCheckFailed {
                message: "two".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Rotor layout rejected: Custom check failed: one; Custom check failed: two"
        );
    }
}
