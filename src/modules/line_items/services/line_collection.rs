use tracing::{debug, warn};

use crate::modules::line_items::models::{EditOutcome, LineEdit, LineItem};
use crate::modules::taxes::GstRate;

/// Ordered, never-empty set of lines owned by one document
///
/// Order is display order only; it has no effect on totals.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCollection {
    lines: Vec<LineItem>,
    default_rate: GstRate,
}

impl LineCollection {
    /// Collection holding a single blank line
    pub fn new(default_rate: GstRate) -> Self {
        Self {
            lines: vec![LineItem::with_tax_rate(default_rate)],
            default_rate,
        }
    }

    /// Wrap existing lines; an empty list gets one blank line
    pub fn from_lines(lines: Vec<LineItem>, default_rate: GstRate) -> Self {
        if lines.is_empty() {
            return Self::new(default_rate);
        }
        Self {
            lines,
            default_rate,
        }
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.lines.iter()
    }

    /// Append a blank line and return its index
    pub fn add_line(&mut self) -> usize {
        self.lines.push(LineItem::with_tax_rate(self.default_rate));
        self.lines.len() - 1
    }

    /// Remove the line at `index`
    ///
    /// # Returns
    /// * `false` if it is the last remaining line or the index is out of range;
    ///   the collection is unchanged in both cases
    pub fn remove_line(&mut self, index: usize) -> bool {
        if self.lines.len() <= 1 {
            debug!("Ignoring removal of the only remaining line");
            return false;
        }
        if index >= self.lines.len() {
            warn!(index, len = self.lines.len(), "Line removal index out of range");
            return false;
        }

        self.lines.remove(index);
        true
    }

    /// Apply one field edit, recomputing the edited line's total
    pub fn apply_edit(&mut self, edit: &LineEdit) -> EditOutcome {
        let Some(line) = self.lines.get_mut(edit.line_index) else {
            warn!(
                index = edit.line_index,
                field = %edit.field,
                "Edit targets a line that does not exist"
            );
            return EditOutcome::IndexOutOfRange;
        };

        if !line.apply(edit.field, &edit.value) {
            warn!(
                index = edit.line_index,
                field = %edit.field,
                value = %edit.value,
                "Edit value rejected"
            );
            return EditOutcome::Rejected;
        }

        debug!(
            index = edit.line_index,
            field = %edit.field,
            total = %line.total(),
            "Line recalculated"
        );
        EditOutcome::Applied
    }
}

impl<'a> IntoIterator for &'a LineCollection {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
