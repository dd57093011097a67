pub mod app;
pub mod canvas_view;
pub mod splash;
pub mod status_bar;
pub mod theme;
pub mod toolbar;
