//! Expense records: entry form, persistence and the total summary.

mod category;
mod create_endpoint;
mod db;
mod new_expense_page;
mod total_endpoint;

pub use category::Category;
pub use create_endpoint::create_expense_endpoint;
pub use db::{
    Expense, NewExpense, create_expense, create_expense_table, get_expense, get_total_expenses,
};
pub use new_expense_page::get_new_expense_page;
pub use total_endpoint::get_expense_total_endpoint;
