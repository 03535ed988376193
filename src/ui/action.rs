//! Actions that can be triggered by keybindings
//!
//! Each action represents a single, atomic operation in the UI.

use serde::{Deserialize, Serialize};

/// All mappable UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ========== Global Actions ==========
    /// Quit the application
    Quit,

    // ========== Table ==========
    /// Move focus to the search box
    FocusSearch,
    /// Clear the search text and show every record
    ClearSearch,
    /// Open the form for a new record
    AddRecord,
    /// Open the form for the selected record
    EditRecord,
    /// Ask to delete the selected record
    DeleteRecord,
    /// Toggle sorting by organization name
    SortByName,
    /// Toggle sorting by director
    SortByDirector,
    /// Go to the previous page
    PrevPage,
    /// Go to the next page
    NextPage,
    /// Select next row
    SelectNext,
    /// Select previous row
    SelectPrev,

    // ========== Form ==========
    /// Focus the next form field
    NextField,
    /// Focus the previous form field
    PrevField,

    // ========== Shared by inputs and dialogs ==========
    /// Submit the current input or dialog
    Submit,
    /// Cancel the current dialog/mode
    Cancel,

    // ========== Text Editing ==========
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    Delete,
    /// Delete word before cursor
    DeleteWordBack,
    /// Delete from cursor to start of line
    DeleteToStart,
    /// Delete from cursor to end of line
    DeleteToEnd,
    /// Move cursor left one character
    MoveCursorLeft,
    /// Move cursor right one character
    MoveCursorRight,
    /// Move cursor to start of line
    MoveCursorStart,
    /// Move cursor to end of line
    MoveCursorEnd,
    /// Move cursor left one word
    MoveWordLeft,
    /// Move cursor right one word
    MoveWordRight,

    // ========== Confirmation Dialog ==========
    /// Confirm (yes)
    ConfirmYes,
    /// Decline (no)
    ConfirmNo,
    /// Switch the highlighted button
    ConfirmToggle,
}

impl Action {
    /// Parse an action name as written in config.toml
    pub fn from_name(name: &str) -> Option<Self> {
        let action = match name {
            "quit" => Action::Quit,
            "focus_search" => Action::FocusSearch,
            "clear_search" => Action::ClearSearch,
            "add_record" => Action::AddRecord,
            "edit_record" => Action::EditRecord,
            "delete_record" => Action::DeleteRecord,
            "sort_by_name" => Action::SortByName,
            "sort_by_director" => Action::SortByDirector,
            "prev_page" => Action::PrevPage,
            "next_page" => Action::NextPage,
            "select_next" => Action::SelectNext,
            "select_prev" => Action::SelectPrev,
            "next_field" => Action::NextField,
            "prev_field" => Action::PrevField,
            "submit" => Action::Submit,
            "cancel" => Action::Cancel,
            "backspace" => Action::Backspace,
            "delete" => Action::Delete,
            "delete_word_back" => Action::DeleteWordBack,
            "delete_to_start" => Action::DeleteToStart,
            "delete_to_end" => Action::DeleteToEnd,
            "move_cursor_left" => Action::MoveCursorLeft,
            "move_cursor_right" => Action::MoveCursorRight,
            "move_cursor_start" => Action::MoveCursorStart,
            "move_cursor_end" => Action::MoveCursorEnd,
            "move_word_left" => Action::MoveWordLeft,
            "move_word_right" => Action::MoveWordRight,
            "confirm_yes" => Action::ConfirmYes,
            "confirm_no" => Action::ConfirmNo,
            "confirm_toggle" => Action::ConfirmToggle,
            _ => return None,
        };
        Some(action)
    }

    /// Whether the action edits text in the focused input
    pub fn is_text_edit(&self) -> bool {
        matches!(
            self,
            Action::Backspace
                | Action::Delete
                | Action::DeleteWordBack
                | Action::DeleteToStart
                | Action::DeleteToEnd
                | Action::MoveCursorLeft
                | Action::MoveCursorRight
                | Action::MoveCursorStart
                | Action::MoveCursorEnd
                | Action::MoveWordLeft
                | Action::MoveWordRight
        )
    }
}
