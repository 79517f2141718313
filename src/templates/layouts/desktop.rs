use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    layout(title, None, content)
}

/// Same page chrome, reloading itself every `seconds` (used while the
/// listings are still loading).
pub fn refreshing_layout(title: &str, seconds: u32, content: Markup) -> Markup {
    layout(title, Some(seconds), content)
}

fn layout(title: &str, refresh: Option<u32>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(seconds) = refresh {
                    meta http-equiv="refresh" content=(seconds);
                }
                title { (title) " | Senior Care Directory" }
                link rel="icon" type="image/svg+xml" href="/static/placeholder.svg";
                link rel="stylesheet" href="/static/main.css";
            }
            body class="bg-gray-50 min-h-screen" {
                header class="bg-white shadow flex items-center justify-between px-6 py-3" {
                    a href="/" class="text-lg font-semibold text-[#206645]" { "Senior Care Directory" }
                    nav {
                        ul class="flex space-x-4" {
                            li { a href="/" { "Home" } }
                            li { a href="/admin/listings" { "Manage Listings" } }
                        }
                    }
                }

                (content)

                footer class="mt-16 py-6 text-center text-sm text-gray-500" {
                    "Care homes, caregivers, transport and stores for seniors."
                }
            }
        }
    }
}
