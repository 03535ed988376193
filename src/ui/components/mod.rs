mod confirmation_dialog;
mod dialog;
mod global_footer;
mod key_hints;
mod org_form_dialog;
mod org_table;
mod pager;
mod search_bar;
mod text_input;
pub mod theme;

pub use confirmation_dialog::{ConfirmationContext, ConfirmationDialog, ConfirmationDialogState};
pub use dialog::{DialogFrame, InstructionBar, StatusLine};
pub use global_footer::{FooterContext, GlobalFooter};
pub use key_hints::{render_key_hints, KeyHintBarStyle};
pub use org_form_dialog::{
    FormField, FormMode, OrgFormDialog, OrgFormState, ADD_TITLE, EDIT_TITLE,
};
pub use org_table::{header_label, OrgTable};
pub use pager::Pager;
pub use search_bar::{SearchBar, SEARCH_PLACEHOLDER};
pub use text_input::TextInputState;
