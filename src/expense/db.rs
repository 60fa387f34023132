//! Database functions for expense records.

use rusqlite::{Connection, Row, params, types::Type};

use crate::{Error, database_id::DatabaseID, expense::Category};

/// An expense record stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID of the expense record in the database.
    pub id: DatabaseID,
    /// When the expense occurred, as entered by the user.
    pub date: String,
    /// The category the expense is filed under.
    pub category: Category,
    /// How much was spent. Always greater than zero.
    pub amount: f64,
    /// A free-form note. May be empty.
    pub description: String,
}

/// The data for an expense record that has not been saved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// When the expense occurred.
    pub date: String,
    /// The category the expense is filed under.
    pub category: Category,
    /// How much was spent.
    pub amount: f64,
    /// A free-form note. May be empty.
    pub description: String,
}

/// Create the expense table in the database.
///
/// Safe to call on every start-up: the table is only created if it does not
/// exist, and records already stored are left untouched. `AUTOINCREMENT`
/// stops SQLite from reusing the ID of a deleted row.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            category TEXT NOT NULL,
            amount REAL NOT NULL,
            description TEXT NOT NULL
        );",
    )?;

    Ok(())
}

/// Save an expense record in the database.
///
/// The caller must have already checked that the amount is a positive number.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_expense(new_expense: NewExpense, connection: &Connection) -> Result<Expense, Error> {
    connection.execute(
        "INSERT INTO expense (date, category, amount, description) VALUES (?1, ?2, ?3, ?4);",
        params![
            new_expense.date,
            new_expense.category.as_str(),
            new_expense.amount,
            new_expense.description,
        ],
    )?;

    let id = connection.last_insert_rowid();

    Ok(Expense {
        id,
        date: new_expense.date,
        category: new_expense.category,
        amount: new_expense.amount,
        description: new_expense.description,
    })
}

/// Retrieve an expense record from the database.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if there is no expense record with the given `id`.
/// - [Error::SqlError] if there is an unexpected SQL error.
pub fn get_expense(id: DatabaseID, connection: &Connection) -> Result<Expense, Error> {
    connection
        .query_row(
            "SELECT id, date, category, amount, description FROM expense WHERE id = :id;",
            &[(":id", &id)],
            map_row,
        )
        .map_err(|error| error.into())
}

/// Get the sum of all expense amounts in the database.
///
/// Returns `0.0` when no expense records have been saved yet.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn get_total_expenses(connection: &Connection) -> Result<f64, Error> {
    connection
        .query_row("SELECT COALESCE(SUM(amount), 0.0) FROM expense;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

fn map_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let category_name: String = row.get(2)?;
    let category = category_name.parse().map_err(|error: Error| {
        rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(error))
    })?;
    let amount = row.get(3)?;
    let description = row.get(4)?;

    Ok(Expense {
        id,
        date,
        category,
        amount,
        description,
    })
}
