//! The endpoint for the total of all recorded expenses.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{AppState, Error, expense::get_total_expenses, html::format_currency};

/// The state needed to total the recorded expenses.
#[derive(Debug, Clone)]
pub struct ExpenseTotalEndpointState {
    /// The database connection for reading expense records.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ExpenseTotalEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Report the total of all recorded expense amounts.
///
/// Returns a fragment for the summary area of the new expense page. The
/// total is zero when no expenses have been recorded yet.
pub async fn get_expense_total_endpoint(
    State(state): State<ExpenseTotalEndpointState>,
) -> Response {
    // The lock is scoped so it is released before the response is rendered.
    let total_result = {
        let connection = match state.db_connection.lock() {
            Ok(connection) => connection,
            Err(error) => {
                tracing::error!("could not acquire database lock: {error}");
                return Error::DatabaseLockError.into_alert_response();
            }
        };

        get_total_expenses(&connection)
    };

    match total_result {
        Ok(total) => expense_total_view(total).into_response(),
        Err(error) => {
            tracing::error!("could not total the expense records: {error}");
            error.into_alert_response()
        }
    }
}

fn expense_total_view(total: f64) -> Markup {
    html! {
        p { "Your Total Expense Recorded:" }

        p class="text-2xl font-bold" { (format_currency(total)) }
    }
}

#[cfg(test)]
mod expense_total_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::Response};
    use rusqlite::Connection;

    use crate::{
        expense::{
            Category, NewExpense, create_expense, create_expense_table,
            get_expense_total_endpoint, total_endpoint::ExpenseTotalEndpointState,
        },
        test_utils::{assert_content_type, parse_html_fragment},
    };

    fn get_test_state() -> ExpenseTotalEndpointState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        create_expense_table(&connection).expect("Could not create expense table");

        ExpenseTotalEndpointState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    async fn fragment_text(response: Response) -> String {
        let html = parse_html_fragment(response).await;

        html.root_element().text().collect::<Vec<_>>().join("")
    }

    #[tokio::test]
    async fn reports_zero_total_for_empty_store() {
        let state = get_test_state();

        let response = get_expense_total_endpoint(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");

        let text = fragment_text(response).await;
        assert!(
            text.contains("Your Total Expense Recorded:"),
            "want summary heading in fragment, got \"{text}\""
        );
        assert!(
            text.contains("$0.00"),
            "want $0.00 for an empty store, got \"{text}\""
        );
    }

    #[tokio::test]
    async fn totals_all_recorded_expenses() {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            let records = [(12.50, "lunch"), (40.00, "Power bill"), (1222.00, "Rent")];
            for (amount, description) in records {
                create_expense(
                    NewExpense {
                        date: "2024-01-01".to_owned(),
                        category: Category::Other,
                        amount,
                        description: description.to_owned(),
                    },
                    &connection,
                )
                .expect("could not create expense record");
            }
        }

        let response = get_expense_total_endpoint(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let text = fragment_text(response).await;
        assert!(
            text.contains("$1,274.50"),
            "want total formatted as $1,274.50, got \"{text}\""
        );
    }

    #[tokio::test]
    async fn reports_storage_failure() {
        // The expense table is never created, so the sum query must fail.
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = ExpenseTotalEndpointState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let response = get_expense_total_endpoint(State(state)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
