pub mod detail_dialog;
pub mod login_form;
pub mod organism_gallery;
pub mod progress_bar;
