mod ledger;
mod models;
mod operations;

use ledger::BudgetLedger;
use operations::add::add_expense_from_input;
use operations::chart::run_chart;
use operations::import::{import_expenses, ImportFormat};
use operations::plan::plan_budget_from_input;
use operations::search_by_category::search_expenses_by_category;
use std::io;

pub enum UserCommands {
    Add,
    Plan,
    Report,
    SixMonth,
    Print,
    Search,
    Import,
    Chart,
    Exit,
}

fn main() {
    println!("Welcome to the budget tracker!");
    let mut ledger = BudgetLedger::new();

    loop {
        println!("Please enter a command (add, plan, report, sixmonth, print, search, import, chart, exit):");

        // read user input
        let input = match read_user_input() {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("Error reading input: {}", e);
                continue;
            }
        };
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }
        let command = check_for_command(parts[0]);
        match command {
            UserCommands::Add => {
                println!("Add command selected. Please enter expense details in the format:\ncategory, description, amount");
                let input = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                match add_expense_from_input(&mut ledger, &input) {
                    Ok(_) => {
                        println!("Expense recorded successfully!");
                    }
                    Err(e) => {
                        println!("Error recording expense: {}", e);
                        println!("Please try again.");
                    }
                }
            }
            UserCommands::Plan => {
                println!("Plan command selected. Please enter budget details in the format:\ncategory, monthly amount");
                let input = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                match plan_budget_from_input(&mut ledger, &input) {
                    Ok(_) => {
                        println!("Monthly budget planned successfully!");
                    }
                    Err(e) => {
                        println!("Error planning budget: {}", e);
                        println!("Please try again.");
                    }
                }
            }
            UserCommands::Report => {
                // the rendering already ends with a newline
                print!("{}", ledger.generate_report());
            }
            UserCommands::SixMonth => {
                println!("{}", ledger.generate_six_month_plan());
            }
            UserCommands::Print => {
                println!("Current Expenses:");
                for expense in ledger.expenses() {
                    println!("{}", expense);
                }
            }
            UserCommands::Search => {
                println!("Search command selected. Provide the category to search for:");
                let input = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                let expenses = ledger.expenses();
                let results = search_expenses_by_category(&input, &expenses);
                if results.is_empty() {
                    println!("No expenses found for category: {}", input);
                } else {
                    println!("Expenses found for category '{}':", input);
                    for expense in results {
                        println!("{}", expense);
                    }
                }
            }
            UserCommands::Import => {
                println!("Import command selected. Please enter the file path to import from (only csv for now):");
                let input = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                let import_result = import_expenses(&mut ledger, ImportFormat::CSV, &input);
                match import_result {
                    Ok(number_of_imported_expenses) => {
                        println!("Successfully imported {} expenses.", number_of_imported_expenses);
                    }
                    Err(err) => println!("Error importing expenses: {}", err),
                }
            }
            UserCommands::Chart => {
                if let Err(err) = run_chart(&ledger) {
                    println!("Error rendering chart: {}", err);
                }
            }
            UserCommands::Exit => {
                println!("Exiting the application.");
                break;
            }
        }
    }
}

fn read_user_input() -> Result<String, String> {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|_| "Failed to read line".to_string())?;
    Ok(input.trim().to_string())
}

fn check_for_command(input: &str) -> UserCommands {
    match input {
        "add" => UserCommands::Add,
        "plan" => UserCommands::Plan,
        "report" => UserCommands::Report,
        "sixmonth" => UserCommands::SixMonth,
        "print" => UserCommands::Print,
        "search" => UserCommands::Search,
        "import" => UserCommands::Import,
        "chart" => UserCommands::Chart,
        "exit" => UserCommands::Exit,
        _ => {
            println!("No valid command found. Exiting.");
            UserCommands::Exit
        }
    }
}
