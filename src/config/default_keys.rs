//! Default keybindings
//!
//! Bindings used when config.toml does not override them.

use std::collections::HashMap;

use super::keys::{KeyCombo, KeyContext, KeybindingConfig};
use crate::ui::action::Action;

/// Helper to insert a keybinding
fn bind(map: &mut HashMap<KeyCombo, Action>, key: &str, action: Action) {
    if let Ok(combo) = key.parse() {
        map.insert(combo, action);
    }
}

/// Readline-style editing keys shared by the search box and the form
fn bind_text_editing(map: &mut HashMap<KeyCombo, Action>) {
    bind(map, "C-a", Action::MoveCursorStart);
    bind(map, "C-e", Action::MoveCursorEnd);
    bind(map, "C-b", Action::MoveCursorLeft);
    bind(map, "C-f", Action::MoveCursorRight);
    bind(map, "C-u", Action::DeleteToStart);
    bind(map, "C-k", Action::DeleteToEnd);
    bind(map, "C-w", Action::DeleteWordBack);
    bind(map, "M-<BS>", Action::DeleteWordBack);
    bind(map, "C-h", Action::Backspace);
    bind(map, "M-b", Action::MoveWordLeft);
    bind(map, "M-f", Action::MoveWordRight);
    bind(map, "<BS>", Action::Backspace);
    bind(map, "<Del>", Action::Delete);
    bind(map, "<Left>", Action::MoveCursorLeft);
    bind(map, "<Right>", Action::MoveCursorRight);
    bind(map, "<Home>", Action::MoveCursorStart);
    bind(map, "<End>", Action::MoveCursorEnd);
}

/// Create the default keybindings configuration
pub fn default_keybindings() -> KeybindingConfig {
    let mut config = KeybindingConfig::new();

    // ========== Global Keybindings ==========
    bind(&mut config.global, "C-q", Action::Quit);
    bind(&mut config.global, "C-c", Action::Quit);

    // ========== Table Mode ==========
    let table = config.context.entry(KeyContext::Table).or_default();
    bind(table, "q", Action::Quit);
    bind(table, "/", Action::FocusSearch);
    bind(table, "C-l", Action::ClearSearch);
    bind(table, "c", Action::ClearSearch);
    bind(table, "a", Action::AddRecord);
    bind(table, "<CR>", Action::EditRecord);
    bind(table, "e", Action::EditRecord);
    bind(table, "x", Action::DeleteRecord);
    bind(table, "<Del>", Action::DeleteRecord);
    bind(table, "1", Action::SortByName);
    bind(table, "2", Action::SortByDirector);
    bind(table, "<Left>", Action::PrevPage);
    bind(table, "h", Action::PrevPage);
    bind(table, "<PageUp>", Action::PrevPage);
    bind(table, "<Right>", Action::NextPage);
    bind(table, "l", Action::NextPage);
    bind(table, "<PageDown>", Action::NextPage);
    bind(table, "<Up>", Action::SelectPrev);
    bind(table, "k", Action::SelectPrev);
    bind(table, "<Down>", Action::SelectNext);
    bind(table, "j", Action::SelectNext);

    // ========== Search Mode ==========
    let search = config.context.entry(KeyContext::Search).or_default();
    bind_text_editing(search);
    bind(search, "<CR>", Action::Submit);
    bind(search, "<Esc>", Action::Cancel);
    bind(search, "<Down>", Action::Submit);

    // ========== Form Mode ==========
    let form = config.context.entry(KeyContext::Form).or_default();
    bind_text_editing(form);
    bind(form, "<Tab>", Action::NextField);
    bind(form, "<Down>", Action::NextField);
    bind(form, "<BackTab>", Action::PrevField);
    bind(form, "<Up>", Action::PrevField);
    bind(form, "<CR>", Action::Submit);
    bind(form, "<Esc>", Action::Cancel);

    // ========== Dialog Mode ==========
    let dialog = config.context.entry(KeyContext::Dialog).or_default();
    bind(dialog, "y", Action::ConfirmYes);
    bind(dialog, "n", Action::ConfirmNo);
    bind(dialog, "<Left>", Action::ConfirmToggle);
    bind(dialog, "<Right>", Action::ConfirmToggle);
    bind(dialog, "<Tab>", Action::ConfirmToggle);
    bind(dialog, "<CR>", Action::Submit);
    bind(dialog, "<Esc>", Action::Cancel);

    config
}
