use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Basic HTML error page
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="max-w-2xl mx-auto py-16 px-4" {
                h1 class="text-2xl font-bold" { "Error " (status) }
                p class="mt-4 text-gray-700" { (message) }
                p class="mt-6" { a href="/admin/listings" { "← Back to listings" } }
            }
        },
    )
}
