pub mod app_body;
pub mod app_dashboard;
pub mod app_header;
pub mod app_login;
pub mod app_notes;
pub mod app_panel;
pub mod app_root;
pub mod app_table;
pub mod icons;
pub mod inputs;
pub mod multi_select;
