use clap::Subcommand;
use pantryplan::config::Config;
use pantryplan_user::{AccountBook, RegisterInput};
use std::io::{BufRead, IsTerminal, Write};

const PASSWORD_ENV: &str = "PANTRYPLAN_PASSWORD";

#[derive(Subcommand)]
pub enum UserCommand {
    /// Create an account. The password is read from PANTRYPLAN_PASSWORD or stdin
    Register { username: String },
    /// Log in, switching to the user's kitchen. The password is read from
    /// PANTRYPLAN_PASSWORD or stdin
    Login { username: String },
    /// Log out, switching back to the shared kitchen
    Logout,
    /// Show who is logged in
    Whoami,
}

#[tracing::instrument(skip_all)]
pub fn user(config: &Config, command: UserCommand) -> pantryplan_shared::Result<()> {
    let mut accounts = AccountBook::open(config.accounts_path());

    match command {
        UserCommand::Register { username } => {
            let password = prompt_password()?;
            accounts.register(RegisterInput {
                username: username.clone(),
                password,
            })?;
            println!("Registered {username}");
        }
        UserCommand::Login { username } => {
            let password = prompt_password()?;
            accounts.login(&username, &password)?;
            println!("Logged in as {username}");
        }
        UserCommand::Logout => match accounts.logout()? {
            Some(username) => println!("Logged out {username}"),
            None => println!("Not logged in"),
        },
        UserCommand::Whoami => match accounts.current_user() {
            Some(username) => println!("{username}"),
            None => println!("Not logged in"),
        },
    }

    Ok(())
}

fn prompt_password() -> pantryplan_shared::Result<String> {
    let stdin = std::io::stdin();
    if std::env::var_os(PASSWORD_ENV).is_none() && stdin.is_terminal() {
        eprint!("Password: ");
        std::io::stderr().flush()?;
    }

    read_password(std::env::var(PASSWORD_ENV).ok(), stdin.lock())
}

/// The environment value wins, otherwise the first line of `input`.
fn read_password(
    env: Option<String>,
    mut input: impl BufRead,
) -> pantryplan_shared::Result<String> {
    if let Some(password) = env {
        return Ok(password);
    }

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_from_env_ignores_input() {
        let password = read_password(Some("from env".to_owned()), "from stdin\n".as_bytes());
        assert_eq!(password.unwrap(), "from env");
    }

    #[test]
    fn test_password_from_first_input_line() {
        let password = read_password(None, "my password\r\nnext line\n".as_bytes());
        assert_eq!(password.unwrap(), "my password");
    }

    #[test]
    fn test_empty_input_is_empty_password() {
        assert_eq!(read_password(None, "".as_bytes()).unwrap(), "");
    }
}
