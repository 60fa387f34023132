//! The API endpoint URIs.

/// The root route which redirects to the new expense page.
pub const ROOT: &str = "/";
/// The page for recording a new expense.
pub const NEW_EXPENSE_VIEW: &str = "/expenses/new";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";
/// The route to create an expense.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route to fetch the total of all recorded expenses.
pub const EXPENSE_TOTAL_API: &str = "/api/expenses/total";
