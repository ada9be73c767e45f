/// Enum representing CLI commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Send,
    Preview,
    Help,
    Unknown(String),
}

pub const USAGE: &str = "\
Usage: pr-digest [command]

Commands:
  send     Fetch pull requests and email the digest (default, takes no flags)
  preview  Print the digest without sending it
  help     Show this message

Configuration is read from the environment or a .env file:
  REPO_OWNER, REPO_NAME, SENDER_EMAIL, RECIPIENT_EMAIL, SMTP_SERVER, SMTP_PORT";

/// Parse command line arguments and return a Command
///
/// # Arguments
/// * `args` - Command line arguments (including program name)
///
/// # Returns
/// * `Command` - The parsed command
pub fn parse_args(args: &[String]) -> Command {
    match args.len() {
        0 | 1 => Command::Send,
        2 => match args[1].as_str() {
            "send" => Command::Send,
            "preview" => Command::Preview,
            "help" | "--help" | "-h" => Command::Help,
            cmd => Command::Unknown(cmd.to_string()),
        },
        _ => Command::Unknown(args[1..].join(" ")),
    }
}
