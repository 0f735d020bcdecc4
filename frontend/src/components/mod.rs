pub mod hero_panel;
pub mod identifier_field;
pub mod mode_tabs;
pub mod password_field;
pub mod site_footer;
