// ABOUTME: UI components for the reorder editor: session list, help overlay and layout

pub mod help;
pub mod layout;
pub mod session_list;

pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use session_list::SessionListComponent;
