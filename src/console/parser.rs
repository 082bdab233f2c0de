// Console commands driving the login form
#[derive(Debug, PartialEq)]
pub enum Command {
    Email(String),
    Password(String),
    Submit,
    Show,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

// Parse a raw input line into a Command
//
// Field arguments are everything after the single separator following the
// command word, so leading and trailing spaces are kept.
pub fn parse_command(raw: &str) -> Command {
    let line = raw.trim_end_matches(['\r', '\n']).trim_start();
    let trimmed = line.trim_end();
    let (cmd, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let cmd = cmd.to_ascii_lowercase();

    match cmd.as_str() {
        "email" => Command::Email(arg.to_string()),
        "password" | "pass" => Command::Password(arg.to_string()),
        "submit" | "login" => Command::Submit,
        "show" => Command::Show,
        "clear" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
