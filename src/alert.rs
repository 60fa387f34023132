//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered into the fixed alert container that every page
//! includes, either directly (error responses routed by `hx-target-error`)
//! or as an out-of-band swap alongside another fragment.

use maud::{Markup, html};

/// Alert message types for styling
#[derive(Debug, Clone)]
pub enum AlertType {
    Success,
    Error,
}

/// A message box with a short headline and optional details.
pub struct Alert<'a> {
    alert_type: AlertType,
    message: &'a str,
    details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new success alert
    pub fn success(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Success,
            message,
            details,
        }
    }

    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Error,
            message,
            details,
        }
    }

    pub fn into_html(self) -> Markup {
        let style = match self.alert_type {
            AlertType::Success => {
                "w-full p-4 mb-4 text-sm rounded-lg border border-green-300 \
                bg-green-50 text-green-800 dark:bg-gray-800 dark:border-green-800 \
                dark:text-green-400"
            }
            AlertType::Error => {
                "w-full p-4 mb-4 text-sm rounded-lg border border-red-300 \
                bg-red-50 text-red-800 dark:bg-gray-800 dark:border-red-800 \
                dark:text-red-400"
            }
        };

        // Template adapted from https://flowbite.com/docs/components/alerts/
        html! {
            div class=(style) role="alert"
            {
                p class="font-medium" { (self.message) }

                @if !self.details.is_empty() {
                    p { (self.details) }
                }
            }
        }
    }

    /// Render the alert wrapped in a copy of the page's alert container.
    ///
    /// Error responses routed to `#alert-container` swap the container
    /// element itself, so the wrapper keeps the container id in the page for
    /// the alerts that follow.
    pub fn into_container_html(self) -> Markup {
        self.into_container(false)
    }

    /// Render the alert wrapped in a copy of the page's alert container so an
    /// out-of-band swap replaces the empty container with this one.
    pub fn into_oob_html(self) -> Markup {
        self.into_container(true)
    }

    fn into_container(self, out_of_band: bool) -> Markup {
        html! {
            div
                id="alert-container"
                hx-swap-oob=[out_of_band.then_some("true")]
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                (self.into_html())
            }
        }
    }
}

#[cfg(test)]
mod alert_tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn renders_message_and_details() {
        let markup = Alert::error("Error", "Could not add expense to the database.").into_html();

        let html = Html::parse_fragment(&markup.into_string());
        let text = html.root_element().text().collect::<Vec<_>>().join(" ");

        assert!(text.contains("Error"), "want headline in alert, got {text}");
        assert!(
            text.contains("Could not add expense to the database."),
            "want details in alert, got {text}"
        );
    }

    #[test]
    fn container_alert_replaces_the_container_in_place() {
        let markup =
            Alert::error("Error", "Could not add expense to the database.").into_container_html();

        let html = Html::parse_fragment(&markup.into_string());
        let container = html
            .select(&Selector::parse("#alert-container").unwrap())
            .next()
            .expect("no alert container in markup");

        assert_eq!(
            container.value().attr("hx-swap-oob"),
            None,
            "want a container that swaps in place of the old one"
        );
        assert!(
            container
                .select(&Selector::parse("[role=alert]").unwrap())
                .next()
                .is_some(),
            "want the alert message inside the container"
        );
    }

    #[test]
    fn oob_alert_targets_the_alert_container() {
        let markup =
            Alert::success("Success", "Expense of $12.50 added successfully!").into_oob_html();

        let html = Html::parse_fragment(&markup.into_string());
        let container = html
            .select(&Selector::parse("#alert-container").unwrap())
            .next()
            .expect("no alert container in markup");

        assert_eq!(
            container.value().attr("hx-swap-oob"),
            Some("true"),
            "want the container to swap out-of-band"
        );
    }
}
