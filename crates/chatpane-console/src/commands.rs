//! Console input lines.

/// What one line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text: send it as a chat message.
    Submit(String),
    /// `/model <name>`
    Model(String),
    /// `/models`
    Models,
    /// `/knowledge <text>`
    Knowledge(String),
    Help,
    Quit,
    /// A slash command we do not know, or one missing its argument.
    Invalid(String),
}

pub const HELP: &str = "\
commands:
  /model <name>      switch the model used for the next message
  /models            list configured models
  /knowledge <text>  post text to the knowledge endpoint
  /help              show this help
  /quit              exit
anything else is sent as a chat message";

pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Submit(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match (name, arg.is_empty()) {
        ("model", false) => Command::Model(arg.to_string()),
        ("models", _) => Command::Models,
        ("knowledge", false) => Command::Knowledge(arg.to_string()),
        ("help", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        ("model" | "knowledge", true) => Command::Invalid(format!("/{name} needs an argument")),
        _ => Command::Invalid(format!("unknown command /{name}")),
    }
}
