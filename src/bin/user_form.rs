//! Formulário de registro no terminal, contra um servidor em execução.

use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead, Write};

use user_registration::client::{render, FormState, HttpUsersApi, SubmitOutcome, UserForm, UsersApi};
use user_registration::models::User;

#[derive(Parser, Debug)]
#[command(name = "user-form", about = "Register, edit and delete users from the terminal")]
struct Cli {
    /// Base URL of the registration API
    #[arg(long, env = "API_URL", default_value = "http://localhost:5000")]
    api_url: String,
}

enum Command {
    Submit,
    Edit(usize),
    Delete(usize),
    Refresh,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or("");
    let index = parts.next().and_then(|n| n.parse::<usize>().ok());

    match (verb, index) {
        ("s" | "submit", _) => Command::Submit,
        ("e" | "edit", Some(n)) => Command::Edit(n),
        ("d" | "delete", Some(n)) => Command::Delete(n),
        ("r" | "refresh", _) => Command::Refresh,
        ("q" | "quit", _) => Command::Quit,
        _ => Command::Unknown,
    }
}

/// Lê uma linha; `None` em EOF
fn prompt(stdin: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Preenche os campos; Enter vazio mantém o valor atual
fn fill_fields<A: UsersApi>(form: &mut UserForm<A>, stdin: &mut impl BufRead) -> io::Result<bool> {
    let current = form.state().username.clone();
    let Some(username) = prompt(stdin, &format!("Username [{}]: ", current))? else {
        return Ok(false);
    };
    if !username.is_empty() {
        form.set_username(username);
    }

    let current = form.state().email.clone();
    let Some(email) = prompt(stdin, &format!("Email [{}]: ", current))? else {
        return Ok(false);
    };
    if !email.is_empty() {
        form.set_email(email);
    }

    Ok(true)
}

/// Linha `n` da lista (numerada a partir de 1)
fn user_at(state: &FormState, n: usize) -> Option<User> {
    n.checked_sub(1).and_then(|i| state.users.get(i)).cloned()
}

fn confirm(stdin: &mut impl BufRead, message: &str) -> bool {
    matches!(
        prompt(stdin, &format!("{} [y/N] ", message)),
        Ok(Some(answer)) if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let cli = Cli::parse();
    let mut form = UserForm::new(HttpUsersApi::new(cli.api_url));
    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    form.mount().await;

    loop {
        println!("\n{}", render(form.state()));
        let Some(line) = prompt(
            &mut stdin,
            "[s]ubmit  [e]dit <n>  [d]elete <n>  [r]efresh  [q]uit > ",
        )?
        else {
            break;
        };

        match parse_command(&line) {
            Command::Submit => {
                if !fill_fields(&mut form, &mut stdin)? {
                    break;
                }
                if form.submit().await == SubmitOutcome::Incomplete {
                    println!("Please fill in both username and email.");
                }
            }
            Command::Edit(n) => {
                let row = user_at(form.state(), n);
                match row {
                    Some(user) => form.edit(&user),
                    None => println!("No user #{}", n),
                }
            }
            Command::Delete(n) => {
                let row = user_at(form.state(), n);
                match row {
                    Some(user) => {
                        form.delete(&user.id, |message| confirm(&mut stdin, message)).await;
                    }
                    None => println!("No user #{}", n),
                }
            }
            Command::Refresh => form.fetch_users().await,
            Command::Quit => break,
            Command::Unknown => println!("Unknown command"),
        }
    }

    Ok(())
}
