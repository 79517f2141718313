use maud::{html, Markup};

pub mod badges;
pub mod details;
pub mod edit_form;
pub mod pagination;

pub use badges::{status_badge, type_badge};
pub use details::{detail_fields, format_timestamp};
pub use edit_form::edit_form;
pub use pagination::pagination;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card bg-white shadow rounded-lg p-6" {
            h2 class="text-lg font-semibold" { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
