//! UI-Schicht: egui-Panels, Menü, Dialoge und Viewport-Input.

pub mod input;
pub mod menu;
pub mod options_dialog;
pub mod panel;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use panel::render_control_panel;
pub use status::render_status_bar;
