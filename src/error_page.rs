//! Full-page HTML responses for missing pages and server failures.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, base},
};

/// An error shown to the user as a standalone page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    status: StatusCode,
    title: &'static str,
    description: String,
    fix: String,
}

impl ErrorPage {
    /// The page for a route or transaction that does not exist.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            title: "Not Found",
            description: "Page not found.".to_owned(),
            fix: "Check the address, or the transaction may have been deleted.".to_owned(),
        }
    }

    /// The generic page for failures the user cannot fix.
    pub fn internal_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            title: "Internal Server Error",
            description: "Sorry, something went wrong.".to_owned(),
            fix: "Try again later or check the server logs.".to_owned(),
        }
    }

    /// The page shown when the server was started with an unknown timezone.
    pub fn invalid_timezone(timezone: &str) -> Self {
        Self {
            fix: format!(
                "Could not get the local timezone \"{timezone}\". Restart the server with a \
                valid, canonical timezone name such as \"Pacific/Auckland\"."
            ),
            description: "Invalid timezone settings.".to_owned(),
            ..Self::internal_error()
        }
    }

    fn view(&self) -> Markup {
        let content = html!(
            section class="bg-white dark:bg-gray-900"
            {
                div class="py-8 px-4 mx-auto max-w-screen-sm text-center lg:py-16"
                {
                    h1
                        class="mb-4 text-7xl lg:text-9xl font-extrabold tracking-tight
                            text-blue-600 dark:text-blue-500"
                    {
                        (self.status.as_u16())
                    }

                    p
                        id="error-description"
                        class="mb-4 text-3xl font-bold text-gray-900 dark:text-white"
                    {
                        (self.description)
                    }

                    p class="mb-4 text-lg text-gray-700 dark:text-gray-300" { (self.fix) }

                    a href=(endpoints::DASHBOARD_VIEW) class=(BUTTON_PRIMARY_STYLE)
                    {
                        "Back to the dashboard"
                    }
                }
            }
        );

        base(self.title, &[], &content)
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        (self.status, Html(self.view().into_string())).into_response()
    }
}

/// The fallback handler for unknown routes.
pub async fn get_404_not_found() -> Response {
    ErrorPage::not_found().into_response()
}

/// Display the generic internal server error page.
pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::internal_error().into_response()
}
