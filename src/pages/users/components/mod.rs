pub mod ban_dialog;
pub mod detail;
pub mod table;
