/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigating the record table
    #[default]
    Table,
    /// Typing into the search box
    Search,
    /// Add/edit form is open
    Form,
    /// Delete confirmation is open
    ConfirmDelete,
}
