//! The page for recording a new expense.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    AppState, Error, endpoints,
    expense::Category,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, base, dollar_input_styles,
    },
    navigation::NavBar,
    timezone::get_local_offset,
};

/// The values displayed in the expense form.
///
/// The form is re-rendered after every submission, so everything that should
/// appear in the widgets afterwards must be carried in this struct. There is
/// no other form state: each submission is handled to completion before
/// control returns to the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFormState {
    /// The text shown in the date input.
    pub date: String,
    /// The category shown as selected.
    pub category: Category,
    /// The text shown in the amount input. Kept verbatim so the user can fix
    /// a rejected value instead of retyping it.
    pub amount: String,
    /// The text shown in the description input.
    pub description: String,
    /// A validation error to display below the inputs.
    pub error_message: Option<String>,
}

/// The state needed for the new expense page.
#[derive(Debug, Clone)]
pub struct NewExpensePageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the page for recording a new expense.
///
/// The date input is prefilled with today's date in the configured timezone.
pub async fn get_new_expense_page(State(state): State<NewExpensePageState>) -> Response {
    let today = match get_local_offset(&state.local_timezone) {
        Some(offset) => OffsetDateTime::now_utc().to_offset(offset).date(),
        None => return Error::InvalidTimezoneError(state.local_timezone).into_response(),
    };

    let form_state = ExpenseFormState {
        date: today.to_string(),
        ..Default::default()
    };

    new_expense_view(&form_state).into_response()
}

fn new_expense_view(form_state: &ExpenseFormState) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_EXPENSE_VIEW).into_html();
    let form = expense_form(form_state);

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="self-start mb-4 text-xl font-bold leading-tight tracking-tight md:text-2xl"
            {
                "Add Expense"
            }

            (form)

            (expense_summary_section())
        }
    };

    base("Add Expense", &[dollar_input_styles()], &content)
}

/// The expense entry form.
///
/// Submissions target the form itself so the response can swap in a fresh
/// rendering, either with an error message and the submitted values intact or
/// with the amount and description cleared after a successful save.
pub(crate) fn expense_form(form_state: &ExpenseFormState) -> Markup {
    html! {
        form
            hx-post=(endpoints::EXPENSES_API)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date (YYYY-MM-DD)" }

                input
                    id="date"
                    type="text"
                    name="date"
                    value=(form_state.date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select
                    id="category"
                    name="category"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in Category::ALL {
                        option value=(category) selected[category == form_state.category]
                        {
                            (category.label())
                        }
                    }
                }
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount ($)" }

                div class="input-wrapper w-full"
                {
                    input
                        id="amount"
                        type="text"
                        name="amount"
                        value=(form_state.amount)
                        placeholder="0.00"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    id="description"
                    type="text"
                    name="description"
                    value=(form_state.description)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if let Some(error_message) = &form_state.error_message {
                p class="text-red-600 dark:text-red-400" { (error_message) }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
        }
    }
}

fn expense_summary_section() -> Markup {
    html! {
        section class="w-full mt-8 space-y-4"
        {
            h2 class="text-lg font-bold" { "Expense Summary" }

            button
                type="button"
                hx-get=(endpoints::EXPENSE_TOTAL_API)
                hx-target="#expense-summary"
                hx-swap="innerHTML"
                hx-target-error="#alert-container"
                class=(BUTTON_SECONDARY_STYLE)
            {
                "View Total"
            }

            div id="expense-summary" {}
        }
    }
}
