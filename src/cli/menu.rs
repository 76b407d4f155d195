//! Interactive menu loop
//!
//! The prompt-driven front end over the ledger engine. This layer only
//! collects input, dispatches to the engine's public surface, and prints
//! results; every rule and every reason string lives in the engine and is
//! surfaced here verbatim.

use crate::core::{LedgerEngine, PersistenceGateway};
use crate::types::{Account, Transaction};
use std::io::{self, BufRead, Write};

/// Run the menu loop until the operator exits or input ends
///
/// # Errors
///
/// Only terminal I/O errors propagate; every ledger rejection is printed
/// and the loop continues.
pub fn run<G: PersistenceGateway>(engine: &mut LedgerEngine<G>) -> io::Result<()> {
    loop {
        render_menu();

        let choice = match ask("Select option (1-9): ")? {
            Some(choice) => choice,
            None => {
                // Input ended; same best-effort save as an explicit exit.
                exit_app(engine);
                return Ok(());
            }
        };

        match choice.trim() {
            "1" => create_account(engine)?,
            "2" => view_account_details(engine)?,
            "3" => list_all_accounts(engine),
            "4" => deposit_funds(engine)?,
            "5" => withdraw_funds(engine)?,
            "6" => transfer_funds(engine)?,
            "7" => view_transaction_history(engine)?,
            "8" => delete_account(engine)?,
            "9" => {
                exit_app(engine);
                return Ok(());
            }
            _ => println!("Invalid option. Please select 1-9."),
        }
    }
}

fn render_menu() {
    println!();
    println!("======================================");
    println!("=            BANK LEDGER             =");
    println!("======================================");
    println!("1. Create New Account");
    println!("2. View Account Details");
    println!("3. List All Accounts");
    println!("4. Deposit Funds");
    println!("5. Withdraw Funds");
    println!("6. Transfer Between Accounts");
    println!("7. View Transaction History");
    println!("8. Delete Account");
    println!("9. Exit Application");
}

/// Prompt and read one line; `None` means input ended
fn ask(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn format_money(amount: rust_decimal::Decimal) -> String {
    format!("${amount:.2}")
}

fn create_account<G: PersistenceGateway>(engine: &mut LedgerEngine<G>) -> io::Result<()> {
    println!("Create New Account");

    let Some(holder_name) = ask("Account holder name: ")? else {
        return Ok(());
    };
    let Some(initial_deposit) = ask("Initial deposit amount: ")? else {
        return Ok(());
    };

    match engine.open_account(&holder_name, &initial_deposit) {
        Ok(id) => println!("Account created successfully. ID: {id}"),
        Err(error) => println!("{error}"),
    }
    Ok(())
}

fn view_account_details<G: PersistenceGateway>(engine: &LedgerEngine<G>) -> io::Result<()> {
    println!("View Account Details");

    let Some(id) = ask("Account ID: ")? else {
        return Ok(());
    };

    match engine.account(&id) {
        Some(account) => print_account(account),
        None => println!("Account not found."),
    }
    Ok(())
}

fn print_account(account: &Account) {
    println!("Account: {}", account.id);
    println!("Holder:  {}", account.holder_name);
    println!("Balance: {}", format_money(account.balance));
    println!("Opened:  {}", account.created_at.format("%Y-%m-%d"));
}

fn list_all_accounts<G: PersistenceGateway>(engine: &LedgerEngine<G>) {
    println!("All Accounts");

    if engine.is_empty() {
        println!("No accounts found.");
        return;
    }

    let (accounts, has_invalid) = engine.list_accounts();
    if has_invalid {
        println!("Invalid data detected. Some accounts have been filtered.");
    }
    if accounts.is_empty() {
        println!("No valid accounts found.");
        return;
    }

    for account in &accounts {
        println!(
            "{}  {}  {}  ACTIVE",
            account.id,
            account.holder_name,
            format_money(account.balance)
        );
    }
    println!("Total accounts: {}", accounts.len());
    println!("Total balance: {}", format_money(engine.total_balance()));
}

fn deposit_funds<G: PersistenceGateway>(engine: &mut LedgerEngine<G>) -> io::Result<()> {
    println!("Deposit Funds");

    let Some(id) = ask("Account ID: ")? else {
        return Ok(());
    };
    if engine.account(&id).is_none() {
        println!("Account not found.");
        return Ok(());
    }

    let Some(amount) = ask("Deposit amount: ")? else {
        return Ok(());
    };
    match engine.deposit(&id, &amount) {
        Ok(balance) => println!("Deposit complete. New balance: {}", format_money(balance)),
        Err(error) => println!("{error}"),
    }
    Ok(())
}

fn withdraw_funds<G: PersistenceGateway>(engine: &mut LedgerEngine<G>) -> io::Result<()> {
    println!("Withdraw Funds");

    let Some(id) = ask("Account ID: ")? else {
        return Ok(());
    };
    if engine.account(&id).is_none() {
        println!("Account not found.");
        return Ok(());
    }

    let Some(amount) = ask("Withdrawal amount: ")? else {
        return Ok(());
    };
    match engine.withdraw(&id, &amount) {
        Ok(balance) => println!("Withdrawal complete. New balance: {}", format_money(balance)),
        Err(error) => println!("{error}"),
    }
    Ok(())
}

fn transfer_funds<G: PersistenceGateway>(engine: &mut LedgerEngine<G>) -> io::Result<()> {
    println!("Transfer Between Accounts");

    let Some(from_id) = ask("From Account ID: ")? else {
        return Ok(());
    };
    let Some(to_id) = ask("To Account ID: ")? else {
        return Ok(());
    };
    let Some(amount) = ask("Transfer amount: ")? else {
        return Ok(());
    };

    match engine.transfer(&from_id, &to_id, &amount) {
        Ok(()) => println!("Transfer completed."),
        Err(error) => println!("{error}"),
    }
    Ok(())
}

fn view_transaction_history<G: PersistenceGateway>(engine: &LedgerEngine<G>) -> io::Result<()> {
    println!("Transaction History");

    let Some(id) = ask("Account ID: ")? else {
        return Ok(());
    };

    match engine.history(&id) {
        Ok([]) => println!("No transactions found."),
        Ok(transactions) => {
            for transaction in transactions {
                print_transaction(transaction);
            }
        }
        Err(error) => println!("{error}"),
    }
    Ok(())
}

fn print_transaction(transaction: &Transaction) {
    println!(
        "{}  {}  {}  {}",
        transaction.timestamp.format("%Y-%m-%d"),
        transaction.tx_type,
        format_money(transaction.amount),
        format_money(transaction.balance_after)
    );
}

fn delete_account<G: PersistenceGateway>(engine: &mut LedgerEngine<G>) -> io::Result<()> {
    println!("Delete Account");

    let Some(id) = ask("Account ID: ")? else {
        return Ok(());
    };

    // The menu never supplies a confirmation; a non-empty account is
    // declined, matching the safe default.
    match engine.delete_account(&id, false) {
        Ok(()) => println!("Account deleted."),
        Err(error) if error.is_confirmation_required() => println!(
            "Requires confirmation: Account has remaining balance. Deletion cancelled."
        ),
        Err(error) => println!("{error}"),
    }
    Ok(())
}

fn exit_app<G: PersistenceGateway>(engine: &LedgerEngine<G>) {
    println!("Saving and exiting...");
    if let Err(error) = engine.save_on_exit() {
        println!("Failed to save data. {error}");
    }
}
