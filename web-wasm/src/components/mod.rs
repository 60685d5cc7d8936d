pub mod header;
pub mod loading;
pub mod result_panel;
pub mod upload_area;
