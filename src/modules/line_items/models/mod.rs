mod line_edit;
mod line_item;

pub use line_edit::{EditOutcome, LineEdit, LineField};
pub use line_item::{LineItem, LineItemInput};
