//! UI Components
//!
//! Reusable Leptos components.

mod form_fields;
mod item_form;
mod item_list;
mod nav_bar;
mod notice_tray;
mod resource_page;
mod status_panels;

pub use form_fields::{
    CheckboxField, ListField, ListSeparator, NumberField, SelectField, TextAreaField, TextField,
};
pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use nav_bar::NavBar;
pub use notice_tray::NoticeTray;
pub use resource_page::ResourcePage;
pub use status_panels::{ErrorPanel, LoadingPanel};
