//! Command-line argument parsing for the steptutor binary.

use crate::models::StepQuestionRequest;

/// Options for asking a question.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AskArgs {
    pub question: String,
    pub step: String,
    pub explanation: String,
    pub topic: String,
    /// Overrides the configured base URL
    pub base_url: Option<String>,
    /// Overrides the configured API key
    pub api_key: Option<String>,
}

impl AskArgs {
    pub fn to_request(&self) -> StepQuestionRequest {
        StepQuestionRequest::new(self.question.clone())
            .with_step(self.step.clone(), self.explanation.clone())
            .with_topic(self.topic.clone())
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Ask the tutor a question (default)
    Ask(AskArgs),
    /// Arguments could not be parsed
    Invalid(String),
}

/// Usage text printed by `--help`
pub const USAGE: &str = "\
Usage: steptutor --question <TEXT> [OPTIONS]

Options:
  -q, --question <TEXT>     Question to ask about the step
  -s, --step <TEXT>         The step being asked about
  -e, --explanation <TEXT>  Explanation already given for the step
  -t, --topic <TEXT>        Topic label
      --base-url <URL>      Backend base URL (default: $STEPTUTOR_BASE_URL)
      --api-key <KEY>       Bearer key (default: $STEPTUTOR_API_KEY)
  -V, --version             Print version
  -h, --help                Print help";

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use steptutor::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["steptutor".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut ask = AskArgs::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let slot = match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--question" | "-q" => &mut ask.question,
            "--step" | "-s" => &mut ask.step,
            "--explanation" | "-e" => &mut ask.explanation,
            "--topic" | "-t" => &mut ask.topic,
            "--base-url" => ask.base_url.get_or_insert_with(String::new),
            "--api-key" => ask.api_key.get_or_insert_with(String::new),
            other => return CliCommand::Invalid(format!("Unknown argument: {}", other)),
        };
        match args.next() {
            Some(value) => *slot = value,
            None => return CliCommand::Invalid(format!("Missing value for {}", arg)),
        }
    }

    if ask.question.trim().is_empty() {
        return CliCommand::Invalid("--question is required".to_string());
    }
    CliCommand::Ask(ask)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> std::vec::IntoIter<String> {
        std::iter::once("steptutor")
            .chain(list.iter().copied())
            .map(str::to_string)
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse_args(args(&["--version"])), CliCommand::Version);
        assert_eq!(parse_args(args(&["-V"])), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse_args(args(&["-h"])), CliCommand::Help);
    }

    #[test]
    fn test_parse_full_question() {
        let command = parse_args(args(&[
            "-q",
            "Why?",
            "--step",
            "x = 2",
            "-e",
            "Divide by 2",
            "--topic",
            "Algebra",
            "--base-url",
            "http://localhost:9000",
        ]));
        let CliCommand::Ask(ask) = command else {
            panic!("Expected Ask command");
        };
        assert_eq!(ask.question, "Why?");
        assert_eq!(ask.step, "x = 2");
        assert_eq!(ask.explanation, "Divide by 2");
        assert_eq!(ask.topic, "Algebra");
        assert_eq!(ask.base_url.as_deref(), Some("http://localhost:9000"));
        assert!(ask.api_key.is_none());

        let request = ask.to_request();
        assert_eq!(request.user_question, "Why?");
        assert_eq!(request.step_explanation, "Divide by 2");
    }

    #[test]
    fn test_parse_requires_question() {
        assert!(matches!(
            parse_args(args(&["--topic", "Algebra"])),
            CliCommand::Invalid(_)
        ));
        assert!(matches!(parse_args(args(&[])), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(
            parse_args(args(&["--question"])),
            CliCommand::Invalid("Missing value for --question".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_argument() {
        assert_eq!(
            parse_args(args(&["--verbose"])),
            CliCommand::Invalid("Unknown argument: --verbose".to_string())
        );
    }
}
