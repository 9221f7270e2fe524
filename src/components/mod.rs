pub mod document_view;
pub mod footer;
pub mod header;
pub mod modals;
pub mod sidebar;
pub mod toc;
