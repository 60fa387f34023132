use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use expense_tracker_rs::{Category, NewExpense, create_expense, initialize_db};

/// A utility for creating a test database for the expense tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test expenses...");

    let expenses = [
        NewExpense {
            date: "2025-07-01".to_owned(),
            category: Category::Bills,
            amount: 450.00,
            description: "Rent".to_owned(),
        },
        NewExpense {
            date: "2025-07-02".to_owned(),
            category: Category::Food,
            amount: 87.35,
            description: "Weekly groceries".to_owned(),
        },
        NewExpense {
            date: "2025-07-03".to_owned(),
            category: Category::Transport,
            amount: 12.50,
            description: "Bus fare".to_owned(),
        },
        NewExpense {
            date: "2025-07-05".to_owned(),
            category: Category::Entertainment,
            amount: 24.99,
            description: "Movie tickets".to_owned(),
        },
        NewExpense {
            date: "2025-07-07".to_owned(),
            category: Category::Income,
            amount: 1250.00,
            description: "Pay day".to_owned(),
        },
        NewExpense {
            date: "2025-07-08".to_owned(),
            category: Category::Other,
            amount: 8.00,
            description: String::new(),
        },
    ];

    for expense in expenses {
        create_expense(expense, &conn)?;
    }

    println!("Success!");

    Ok(())
}
