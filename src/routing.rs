//! Application router configuration with the HTML page and JSON API route definitions.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    error_page::{get_404_not_found, get_internal_server_error_page},
    reports::{
        get_series_endpoint, get_summary_endpoint, post_series_endpoint, post_summary_endpoint,
    },
    transaction::{
        create_transaction_endpoint, create_transaction_form_endpoint,
        delete_transaction_endpoint, delete_transaction_form_endpoint,
        get_edit_transaction_page, get_new_transaction_page, get_transaction_endpoint,
        get_transactions_page, list_transactions_endpoint, update_transaction_endpoint,
        update_transaction_form_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(
            endpoints::NEW_TRANSACTION_VIEW,
            get(get_new_transaction_page).post(create_transaction_form_endpoint),
        )
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page).post(update_transaction_form_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION_VIEW,
            post(delete_transaction_form_endpoint),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_API,
            get(get_transaction_endpoint)
                .put(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::SUMMARY_API,
            get(get_summary_endpoint).post(post_summary_endpoint),
        )
        .route(
            endpoints::SERIES_API,
            get(get_series_endpoint).post(post_series_endpoint),
        );

    page_routes
        .merge(api_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
