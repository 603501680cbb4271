//! Interactive session controller
//!
//! A two-level menu loop: an unauthenticated top level (register, login,
//! exit) and an authenticated sub-level dispatching to the ledger and budget
//! services. The authenticated user travels in an explicit [`Session`]
//! context rather than any ambient state, and logging out simply drops it.
//!
//! Input is normalized (trim + lowercase) and matched against the menu
//! number or the command word; anything else hits an explicit unrecognized
//! branch and the loop re-prompts. Recoverable errors (duplicate username,
//! bad credentials, malformed amounts, bad transaction kinds) are printed
//! and the loop continues; anything else propagates out.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::display;
use crate::error::FinanceResult;
use crate::models::UserId;
use crate::services::{AccountService, BudgetService, LedgerService};
use crate::storage::Storage;

/// The authenticated session context
///
/// Held only for process lifetime; never persisted across restarts.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: UserId,
    pub username: String,
}

/// Top-level menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Login,
    Exit,
}

impl MenuChoice {
    /// Parse normalized input, accepting the menu number or the command word
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "register" => Some(Self::Register),
            "2" | "login" => Some(Self::Login),
            "3" | "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Authenticated sub-menu commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    AddTransaction,
    ViewTransactions,
    GenerateReport,
    SetBudget,
    CheckBudget,
    Logout,
}

impl SessionCommand {
    /// Parse normalized input, accepting the menu number or the command word
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "add" | "add transaction" => Some(Self::AddTransaction),
            "2" | "view" | "view transactions" => Some(Self::ViewTransactions),
            "3" | "report" | "generate report" => Some(Self::GenerateReport),
            "4" | "set" | "set budget" => Some(Self::SetBudget),
            "5" | "check" | "check budget" => Some(Self::CheckBudget),
            "6" | "logout" => Some(Self::Logout),
            _ => None,
        }
    }
}

const MAIN_MENU: &str = "\n1. Register\n2. Login\n3. Exit\nChoose an option: ";
const SESSION_MENU: &str = "\n1. Add Transaction\n2. View Transactions\n3. Generate Report\n\
                            4. Set Budget\n5. Check Budget\n6. Logout\nChoose: ";

/// Run the interactive loop until exit or end of input
pub fn run(storage: &Storage) -> FinanceResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(line) = prompt_line(&mut input, MAIN_MENU)? else {
            break;
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Register) => register(storage, &mut input)?,
            Some(MenuChoice::Login) => {
                if let Some(session) = login(storage, &mut input)? {
                    run_session(storage, &session, &mut input)?;
                }
            }
            Some(MenuChoice::Exit) => {
                println!("Goodbye!");
                break;
            }
            None => println!("Unrecognized option."),
        }
    }

    Ok(())
}

/// Registration dialog
fn register(storage: &Storage, input: &mut impl BufRead) -> FinanceResult<()> {
    let accounts = AccountService::new(storage);

    let Some(username) = prompt_line(input, "Enter a username: ")? else {
        return Ok(());
    };
    let Some(password) = prompt_password(input, "Enter a password: ")? else {
        return Ok(());
    };

    match accounts.register(&username, &password) {
        Ok(_) => println!("Registration successful!"),
        Err(e) if e.is_duplicate_username() => println!("{}. Try again.", e),
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Login dialog; returns the session on success
fn login(storage: &Storage, input: &mut impl BufRead) -> FinanceResult<Option<Session>> {
    let accounts = AccountService::new(storage);

    let Some(username) = prompt_line(input, "Username: ")? else {
        return Ok(None);
    };
    let Some(password) = prompt_password(input, "Password: ")? else {
        return Ok(None);
    };

    match accounts.authenticate(&username, &password) {
        Ok(user_id) => {
            println!("Welcome, {}!", username);
            Ok(Some(Session { user_id, username }))
        }
        Err(e) if e.is_invalid_credentials() => {
            println!("Invalid credentials.");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Authenticated sub-loop, dispatching until logout or end of input
fn run_session(
    storage: &Storage,
    session: &Session,
    input: &mut impl BufRead,
) -> FinanceResult<()> {
    let ledger = LedgerService::new(storage);
    let budgets = BudgetService::new(storage);

    loop {
        let Some(line) = prompt_line(input, SESSION_MENU)? else {
            return Ok(());
        };

        match SessionCommand::parse(&line) {
            Some(SessionCommand::AddTransaction) => {
                let Some(kind) = prompt_line(input, "Type (income/expense): ")? else {
                    return Ok(());
                };
                let Some(category) = prompt_line(input, "Category (Food, Rent, Salary, etc.): ")?
                else {
                    return Ok(());
                };
                let Some(amount) = prompt_line(input, "Amount: ")? else {
                    return Ok(());
                };

                match ledger.add_transaction(session.user_id, &kind, &category, &amount) {
                    Ok(_) => println!("Transaction added successfully!"),
                    Err(e) if e.is_recoverable() => println!("{}", e),
                    Err(e) => return Err(e),
                }
            }
            Some(SessionCommand::ViewTransactions) => {
                let transactions = ledger.list_transactions(session.user_id)?;
                print!("{}", display::format_transaction_list(&transactions));
            }
            Some(SessionCommand::GenerateReport) => {
                let report = ledger.report(session.user_id)?;
                print!("{}", display::format_report(&report));
            }
            Some(SessionCommand::SetBudget) => {
                let Some(category) = prompt_line(input, "Enter category for budget: ")? else {
                    return Ok(());
                };
                let Some(limit) = prompt_line(input, "Enter monthly budget limit: ")? else {
                    return Ok(());
                };

                match budgets.set_budget(session.user_id, &category, &limit) {
                    Ok(_) => println!("Budget set successfully!"),
                    Err(e) if e.is_recoverable() => println!("{}", e),
                    Err(e) => return Err(e),
                }
            }
            Some(SessionCommand::CheckBudget) => {
                let statuses = budgets.check_budgets(session.user_id)?;
                print!("{}", display::format_budget_check(&statuses));
            }
            Some(SessionCommand::Logout) => return Ok(()),
            None => println!("Unrecognized option."),
        }
    }
}

/// Print a prompt and read one line; `None` on end of input
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> FinanceResult<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Read a password: masked on a terminal, a plain line otherwise
///
/// The plain-line path keeps the menu scriptable when input is piped.
fn prompt_password(input: &mut impl BufRead, prompt: &str) -> FinanceResult<Option<String>> {
    if io::stdin().is_terminal() {
        Ok(Some(rpassword::prompt_password(prompt)?))
    } else {
        prompt_line(input, prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Register));
        assert_eq!(MenuChoice::parse("register"), Some(MenuChoice::Register));
        assert_eq!(MenuChoice::parse(" Login "), Some(MenuChoice::Login));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("EXIT"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("delete everything"), None);
    }

    #[test]
    fn test_session_command_parse() {
        assert_eq!(SessionCommand::parse("1"), Some(SessionCommand::AddTransaction));
        assert_eq!(SessionCommand::parse("add"), Some(SessionCommand::AddTransaction));
        assert_eq!(SessionCommand::parse("View Transactions"), Some(SessionCommand::ViewTransactions));
        assert_eq!(SessionCommand::parse("3"), Some(SessionCommand::GenerateReport));
        assert_eq!(SessionCommand::parse("set budget"), Some(SessionCommand::SetBudget));
        assert_eq!(SessionCommand::parse("5"), Some(SessionCommand::CheckBudget));
        assert_eq!(SessionCommand::parse("logout"), Some(SessionCommand::Logout));
        assert_eq!(SessionCommand::parse("7"), None);
        assert_eq!(SessionCommand::parse("budget"), None);
    }
}
