//! The navigation bar shown at the top of every page.

use maud::{Markup, html};

use crate::endpoints;

/// The pages linked from the navigation bar, in display order.
const NAV_LINKS: [(&str, &str); 3] = [
    (endpoints::DASHBOARD_VIEW, "Dashboard"),
    (endpoints::TRANSACTIONS_VIEW, "Transactions"),
    (endpoints::NEW_TRANSACTION_VIEW, "Add Transaction"),
];

const ACTIVE_LINK_STYLE: &str = "block py-2 px-3 rounded-sm text-white bg-blue-700 \
    lg:bg-transparent lg:text-blue-700 lg:p-0 dark:text-white lg:dark:text-blue-500";

const INACTIVE_LINK_STYLE: &str = "block py-2 px-3 rounded-sm text-gray-900 \
    hover:bg-gray-100 lg:hover:bg-transparent lg:hover:text-blue-700 lg:p-0 \
    dark:text-white lg:dark:hover:text-blue-500 dark:hover:bg-gray-700";

/// The navigation bar, highlighting the link for the page being viewed.
pub struct NavBar<'a> {
    active_endpoint: &'a str,
}

impl<'a> NavBar<'a> {
    /// Create a navigation bar for the page at `active_endpoint`.
    ///
    /// Pages that are not in the bar, e.g. the edit page, highlight nothing.
    pub fn new(active_endpoint: &'a str) -> Self {
        Self { active_endpoint }
    }

    fn is_active(&self, url: &str) -> bool {
        self.active_endpoint == url
    }

    pub fn into_html(self) -> Markup {
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a
                        href=(endpoints::DASHBOARD_VIEW)
                        class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                    {
                        "Fintrack"
                    }

                    ul
                        class="font-medium flex flex-col lg:flex-row p-4 lg:p-0 mt-4 lg:mt-0
                            lg:space-x-8 border border-gray-100 lg:border-0 rounded
                            bg-gray-50 lg:bg-white dark:bg-gray-800 lg:dark:bg-gray-900
                            dark:border-gray-700"
                    {
                        @for (url, title) in NAV_LINKS {
                            @let is_active = self.is_active(url);
                            li
                            {
                                a
                                    href=(url)
                                    class=(if is_active { ACTIVE_LINK_STYLE } else { INACTIVE_LINK_STYLE })
                                    aria-current=[is_active.then_some("page")]
                                {
                                    (title)
                                }
                            }
                        }
                    }
                }
            }
        )
    }
}
