//! The endpoint for saving a new expense record.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    debug_handler,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    alert::Alert,
    expense::{
        Category, NewExpense, create_expense,
        new_expense_page::{ExpenseFormState, expense_form},
    },
    html::format_currency,
};

/// The state needed to save an expense record.
#[derive(Debug, Clone)]
pub struct CreateExpenseEndpointState {
    /// The database connection for saving expense records.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateExpenseEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The form data for creating an expense record.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseForm {
    /// The expense date text. Saved as-is.
    pub date: String,
    /// The category the expense is filed under.
    pub category: Category,
    /// The amount text. Kept raw so validation can tell a malformed number
    /// apart from a non-positive one, and echo the rejected text back.
    pub amount: String,
    /// An optional note.
    pub description: String,
}

/// Handle the expense form submission.
///
/// Re-renders the form in place: a validation failure displays an error
/// message with the submitted values intact, a successful save clears the
/// amount and description fields and announces the new record in an alert.
/// A storage failure leaves the form untouched and reports a generic error.
#[debug_handler]
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseEndpointState>,
    Form(form_data): Form<ExpenseForm>,
) -> Response {
    let amount = match parse_amount(&form_data.amount) {
        Ok(amount) => amount,
        Err(error) => {
            let form_state = ExpenseFormState {
                date: form_data.date,
                category: form_data.category,
                amount: form_data.amount,
                description: form_data.description,
                error_message: Some(error.to_string()),
            };

            return expense_form(&form_state).into_response();
        }
    };

    // The lock is scoped so it is released before the response is rendered.
    let expense_result = {
        let connection = match state.db_connection.lock() {
            Ok(connection) => connection,
            Err(error) => {
                tracing::error!("could not acquire database lock: {error}");
                return Error::DatabaseLockError.into_alert_response();
            }
        };

        create_expense(
            NewExpense {
                date: form_data.date.clone(),
                category: form_data.category,
                amount,
                description: form_data.description,
            },
            &connection,
        )
    };

    match expense_result {
        Ok(expense) => {
            let form_state = ExpenseFormState {
                date: form_data.date,
                category: form_data.category,
                ..Default::default()
            };

            let confirmation = format!(
                "Expense of {} added successfully!",
                format_currency(expense.amount)
            );

            html! {
                (expense_form(&form_state))

                (Alert::success("Success", &confirmation).into_oob_html())
            }
            .into_response()
        }
        Err(error) => {
            tracing::error!("could not save expense record: {error}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error("Error", "Could not add expense to the database.")
                    .into_container_html(),
            )
                .into_response()
        }
    }
}

/// Parse the submitted amount text as a positive number.
///
/// Surrounding whitespace is ignored. Values that parse but are not finite
/// are rejected as malformed, so the stored amounts are always real numbers.
fn parse_amount(text: &str) -> Result<f64, Error> {
    let Ok(amount) = text.trim().parse::<f64>() else {
        return Err(Error::AmountNotANumber);
    };

    if !amount.is_finite() {
        return Err(Error::AmountNotANumber);
    }

    if amount <= 0.0 {
        return Err(Error::AmountNotPositive);
    }

    Ok(amount)
}

#[cfg(test)]
mod parse_amount_tests {
    use crate::Error;

    use super::parse_amount;

    #[test]
    fn parses_positive_amounts() {
        for (text, want) in [("12.50", 12.50), ("0.01", 0.01), ("1000", 1000.0)] {
            let got = parse_amount(text);

            assert_eq!(got, Ok(want), "want Ok({want}) from \"{text}\", got {got:?}");
        }
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(parse_amount(" 12.5 "), Ok(12.5));
    }

    #[test]
    fn rejects_text_that_is_not_a_number() {
        for text in ["abc", "", "12.5.0", "$5", "nan", "inf"] {
            let got = parse_amount(text);

            assert_eq!(
                got,
                Err(Error::AmountNotANumber),
                "want Err(AmountNotANumber) from \"{text}\", got {got:?}"
            );
        }
    }

    #[test]
    fn rejects_amounts_that_are_not_positive() {
        for text in ["-5", "0", "0.0", "-0.0"] {
            let got = parse_amount(text);

            assert_eq!(
                got,
                Err(Error::AmountNotPositive),
                "want Err(AmountNotPositive) from \"{text}\", got {got:?}"
            );
        }
    }
}
