/// User interface module
///
/// - sections.rs: decides which sections each page shows
/// - view.rs: turns sections into iced widgets
/// - sidebar.rs: navigation

pub mod sections;
pub mod sidebar;
pub mod view;
