use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::application::{DEFAULT_ACCOUNT_NAME, TellerService};
use crate::domain::{Cents, format_cents, parse_cents};

/// Teller - interactive retail-bank console
#[derive(Parser)]
#[command(name = "teller")]
#[command(about = "An in-memory retail-bank ledger driven from a teller console")]
#[command(version)]
pub struct Cli {
    /// Name of the bank shown on the login screen
    #[arg(short, long, default_value = "Bank of Rust")]
    pub bank: String,

    /// Seed a demo user (John Doe, PIN 1234) with Savings and Checking accounts
    #[arg(long)]
    pub demo: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut service = TellerService::new(&self.bank);

        if self.demo {
            let user = service.register_user("John", "Doe", "1234")?;
            service.open_account(&user.id, "Checking")?;
            println!(
                "Seeded demo user {} {} with id {} (PIN 1234).",
                user.first_name, user.last_name, user.id
            );
        }

        let stdin = io::stdin();
        let mut input = stdin.lock();
        main_menu(&mut service, &mut input)
    }
}

/// Read one line after showing a prompt. `None` means the input stream
/// ended, which callers treat as "leave".
fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn main_menu(service: &mut TellerService, input: &mut impl BufRead) -> Result<()> {
    loop {
        println!("\nWelcome to {}", service.bank().name());
        println!(" 1) Log in");
        println!(" 2) Register");
        println!(" 3) Quit");
        let Some(choice) = prompt(input, "Enter number: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                if let Some(user_id) = login_prompt(service, input)? {
                    session(service, input, &user_id)?;
                }
            }
            "2" => register_prompt(service, input)?,
            "3" => return Ok(()),
            _ => println!("Invalid choice. Please enter 1-3."),
        }
    }
}

fn login_prompt(service: &TellerService, input: &mut impl BufRead) -> Result<Option<String>> {
    loop {
        let Some(user_id) = prompt(input, "Enter user id (blank to cancel): ")? else {
            return Ok(None);
        };
        if user_id.is_empty() {
            return Ok(None);
        }
        let Some(pin) = prompt(input, "Enter PIN: ")? else {
            return Ok(None);
        };

        match service.login(&user_id, &pin) {
            Ok(user) => {
                println!("\nWelcome, {}.", user.first_name);
                return Ok(Some(user.id.clone()));
            }
            Err(err) => println!("{err}. Please try again."),
        }
    }
}

fn register_prompt(service: &mut TellerService, input: &mut impl BufRead) -> Result<()> {
    let Some(first_name) = prompt(input, "First name: ")? else {
        return Ok(());
    };
    let Some(last_name) = prompt(input, "Last name: ")? else {
        return Ok(());
    };
    let Some(pin) = prompt(input, "Choose a PIN: ")? else {
        return Ok(());
    };

    match service.register_user(&first_name, &last_name, &pin) {
        Ok(user) => println!(
            "Created user {} {} with id {}. A {} account was opened for you.",
            user.first_name, user.last_name, user.id, DEFAULT_ACCOUNT_NAME
        ),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn session(service: &mut TellerService, input: &mut impl BufRead, user_id: &str) -> Result<()> {
    loop {
        println!("\nWhat would you like to do?");
        println!(" 1) Show accounts summary");
        println!(" 2) Show account transaction history");
        println!(" 3) Withdraw");
        println!(" 4) Deposit");
        println!(" 5) Transfer");
        println!(" 6) Open a new account");
        println!(" 7) Log out");
        let Some(choice) = prompt(input, "Enter number: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => show_summary(service, user_id),
            "2" => show_history(service, input, user_id)?,
            "3" => withdraw_flow(service, input, user_id)?,
            "4" => deposit_flow(service, input, user_id)?,
            "5" => transfer_flow(service, input, user_id)?,
            "6" => open_account_flow(service, input, user_id)?,
            "7" => return Ok(()),
            _ => println!("Invalid choice. Please enter 1-7."),
        }
    }
}

fn show_summary(service: &TellerService, user_id: &str) {
    match service.accounts_summary(user_id) {
        Ok(lines) => {
            println!();
            for (position, line) in lines.iter().enumerate() {
                println!("  {}) {}", position + 1, line);
            }
        }
        Err(err) => println!("{err}"),
    }
}

fn show_history(
    service: &TellerService,
    input: &mut impl BufRead,
    user_id: &str,
) -> Result<()> {
    let Some(index) = prompt_account_index(service, input, user_id, "inspect")? else {
        return Ok(());
    };
    match service.account_history(user_id, index) {
        Ok(lines) => {
            let account_id = service.account_id(user_id, index)?;
            println!("\nTransaction history for account {account_id}");
            for line in lines {
                println!("  {line}");
            }
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn deposit_flow(
    service: &mut TellerService,
    input: &mut impl BufRead,
    user_id: &str,
) -> Result<()> {
    let Some(index) = prompt_account_index(service, input, user_id, "deposit into")? else {
        return Ok(());
    };
    let Some(amount) = prompt_amount(input, None)? else {
        return Ok(());
    };
    let Some(memo) = prompt(input, "Enter a memo: ")? else {
        return Ok(());
    };

    match service.deposit(user_id, index, amount, (!memo.is_empty()).then_some(memo)) {
        Ok(_) => println!("Deposited ${}.", format_cents(amount)),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn withdraw_flow(
    service: &mut TellerService,
    input: &mut impl BufRead,
    user_id: &str,
) -> Result<()> {
    let Some(index) = prompt_account_index(service, input, user_id, "withdraw from")? else {
        return Ok(());
    };
    let balance = match service.account_balance(user_id, index) {
        Ok(balance) => balance,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };
    let Some(amount) = prompt_amount(input, Some(balance))? else {
        return Ok(());
    };
    let Some(memo) = prompt(input, "Enter a memo: ")? else {
        return Ok(());
    };

    match service.withdraw(user_id, index, amount, (!memo.is_empty()).then_some(memo)) {
        Ok(_) => println!("Withdrew ${}.", format_cents(amount)),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn transfer_flow(
    service: &mut TellerService,
    input: &mut impl BufRead,
    user_id: &str,
) -> Result<()> {
    let Some(from_index) = prompt_account_index(service, input, user_id, "transfer from")? else {
        return Ok(());
    };
    let Some(to_index) = prompt_account_index(service, input, user_id, "transfer to")? else {
        return Ok(());
    };
    let balance = match service.account_balance(user_id, from_index) {
        Ok(balance) => balance,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };
    let Some(amount) = prompt_amount(input, Some(balance))? else {
        return Ok(());
    };

    match service.transfer(user_id, from_index, to_index, amount) {
        Ok(_) => println!("Transferred ${}.", format_cents(amount)),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn open_account_flow(
    service: &mut TellerService,
    input: &mut impl BufRead,
    user_id: &str,
) -> Result<()> {
    let Some(name) = prompt(input, "Account name: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        println!("Account name must not be empty.");
        return Ok(());
    }
    match service.open_account(user_id, &name) {
        Ok(account) => println!("Opened account {} ({}).", account.id, account.name),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

/// Ask for a 1-based account number and return the 0-based index,
/// re-prompting on anything out of range.
fn prompt_account_index(
    service: &TellerService,
    input: &mut impl BufRead,
    user_id: &str,
    verb: &str,
) -> Result<Option<usize>> {
    let count = match service.account_count(user_id) {
        Ok(count) => count,
        Err(err) => {
            println!("{err}");
            return Ok(None);
        }
    };
    loop {
        let message = format!("Enter the number (1-{count}) of the account to {verb}: ");
        let Some(raw) = prompt(input, &message)? else {
            return Ok(None);
        };
        match raw.parse::<usize>() {
            Ok(number) if (1..=count).contains(&number) => return Ok(Some(number - 1)),
            _ => println!("Invalid account. Please try again."),
        }
    }
}

/// Ask for a positive dollar amount, optionally capped at `max`,
/// re-prompting until the input is acceptable.
fn prompt_amount(input: &mut impl BufRead, max: Option<Cents>) -> Result<Option<Cents>> {
    loop {
        let message = match max {
            Some(max) => format!("Enter the amount (max ${}): $", format_cents(max)),
            None => "Enter the amount: $".to_string(),
        };
        let Some(raw) = prompt(input, &message)? else {
            return Ok(None);
        };
        match parse_cents(&raw) {
            Ok(amount) if amount <= 0 => {
                println!("Amount must be greater than zero. Please try again.");
            }
            Ok(amount) => match max {
                Some(max) if amount > max => {
                    println!(
                        "Amount must not be greater than the balance of ${}.",
                        format_cents(max)
                    );
                }
                _ => return Ok(Some(amount)),
            },
            Err(err) => println!("{err}. Please try again."),
        }
    }
}
