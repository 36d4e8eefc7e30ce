//! TextBoxController - the editing core behind a text-input widget.
//!
//! Owns the rune buffer, the cursor list and the caret history. Every
//! text-changing operation is a batch of independent replacements, one per
//! cursor, all expressed in pre-batch coordinates. Cursors are processed from
//! the highest start index to the lowest so a replacement only ever disturbs
//! text to the right of the cursors still waiting to be processed. The
//! resulting [`TextEdit`]s keep that high-to-low order when reported.

use tracing::{debug, trace};

use super::buffer::RuneBuffer;
use super::cursor::TextCursor;
use super::cursor_list::CursorList;
use super::edit::{shift_span, splice, TextEdit};
use super::history::CaretHistory;
use super::messages::{IndexTransform, MoveTarget, TextBoxMsg};
use crate::config::TextBoxConfig;
use crate::events::{Event, SubscriptionId};
use crate::tracing::SelectionSnapshot;
use crate::util::text::spaces;

#[derive(Debug)]
pub struct TextBoxController {
    buffer: RuneBuffer,
    selections: CursorList,
    history: CaretHistory,
    /// Set by selection-only changes, consumed by the next text edit
    store_caret_locations_next_edit: bool,
    config: TextBoxConfig,
    on_selection_changed: Event<()>,
    on_text_changed: Event<[TextEdit]>,
    /// Last reported selection state, kept for trace diffs
    last_snapshot: SelectionSnapshot,
}

impl Default for TextBoxController {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBoxController {
    pub fn new() -> Self {
        Self::with_config(TextBoxConfig::default())
    }

    pub fn with_config(config: TextBoxConfig) -> Self {
        let selections = CursorList::single(TextCursor::caret(0));
        Self {
            buffer: RuneBuffer::new(),
            last_snapshot: SelectionSnapshot::from_selections(&selections),
            selections,
            history: CaretHistory::with_max_size(config.history_limit),
            store_caret_locations_next_edit: false,
            config,
            on_selection_changed: Event::new(),
            on_text_changed: Event::new(),
        }
    }

    /// Create a controller holding `text` with a caret at 0
    pub fn from_text(text: &str) -> Self {
        let mut controller = Self::new();
        controller.buffer.set_text(text);
        controller
    }

    pub fn config(&self) -> &TextBoxConfig {
        &self.config
    }

    pub fn buffer(&self) -> &RuneBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &CaretHistory {
        &self.history
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    pub fn on_selection_changed(&mut self, f: impl FnMut(&()) + 'static) -> SubscriptionId {
        self.on_selection_changed.listen(f)
    }

    pub fn on_text_changed(&mut self, f: impl FnMut(&[TextEdit]) + 'static) -> SubscriptionId {
        self.on_text_changed.listen(f)
    }

    pub fn unsubscribe_selection_changed(&mut self, id: SubscriptionId) -> bool {
        self.on_selection_changed.unlisten(id)
    }

    pub fn unsubscribe_text_changed(&mut self, id: SubscriptionId) -> bool {
        self.on_text_changed.unlisten(id)
    }

    fn trace_selection_diff(&mut self) {
        if tracing::enabled!(target: "selection", tracing::Level::TRACE) {
            let snapshot = SelectionSnapshot::from_selections(&self.selections);
            if let Some(diff) = self.last_snapshot.diff(&snapshot) {
                trace!(target: "selection", "{}", diff);
            }
            self.last_snapshot = snapshot;
        }
    }

    fn selection_changed(&mut self) {
        self.trace_selection_diff();
        self.selections.assert_invariants();
        self.on_selection_changed.fire(&());
    }

    fn text_edited(&mut self, op: &'static str, edits: Vec<TextEdit>) {
        self.update_selections_for_edits(&edits);
        debug!(
            target: "edit",
            op,
            edits = edits.len(),
            len = self.buffer.len(),
            carets = self.selections.len(),
            "text edited"
        );
        self.trace_selection_diff();
        self.selections.assert_invariants();
        self.on_text_changed.fire(&edits);
    }

    /// Re-map every cursor through `edits` and re-merge the results.
    fn update_selections_for_edits(&mut self, edits: &[TextEdit]) {
        let len = self.buffer.len();
        let mut selections = CursorList::new();
        for cursor in &self.selections {
            let (start, end) = shift_span(cursor.range(), edits, len);
            if cursor.caret_at_start() {
                selections.merge(TextCursor::from_to(end, start));
            } else {
                selections.merge(TextCursor::from_to(start, end));
            }
        }
        if selections.is_empty() {
            selections.merge(TextCursor::caret(0));
        }
        self.selections = selections;
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn text_range(&self, start: usize, end: usize) -> String {
        self.buffer.text_range(start, end)
    }

    pub fn chars(&self) -> &[char] {
        self.buffer.chars()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn line(&self, line: usize) -> String {
        self.buffer.line(line)
    }

    pub fn line_chars(&self, line: usize) -> &[char] {
        self.buffer.line_chars(line)
    }

    pub fn line_start(&self, line: usize) -> usize {
        self.buffer.line_start(line)
    }

    pub fn line_end(&self, line: usize) -> usize {
        self.buffer.line_end(line)
    }

    pub fn line_indent(&self, line: usize) -> usize {
        self.buffer.line_indent(line)
    }

    pub fn line_index(&self, position: usize) -> usize {
        self.buffer.line_index(position)
    }

    pub fn line_and_column(&self, index: usize) -> (usize, usize) {
        self.buffer.line_and_column(index)
    }

    pub fn word_at(&self, index: usize) -> (usize, usize) {
        self.buffer.word_at(index)
    }

    pub fn selection_count(&self) -> usize {
        self.selections.len()
    }

    /// Panics if `i >= selection_count()`.
    pub fn selection(&self, i: usize) -> TextCursor {
        self.selections[i]
    }

    pub fn selections(&self) -> &CursorList {
        &self.selections
    }

    pub fn selection_text(&self, i: usize) -> String {
        let (start, end) = self.selections[i].range();
        self.buffer.text_range(start, end)
    }

    /// Text of the line holding the start of selection `i`
    pub fn selection_line_text(&self, i: usize) -> String {
        let line = self.buffer.line_index(self.selections[i].start());
        self.buffer.line(line)
    }

    pub fn caret(&self, i: usize) -> usize {
        self.selections[i].index
    }

    pub fn carets(&self) -> Vec<usize> {
        self.selections.carets()
    }

    pub fn first_caret(&self) -> usize {
        self.caret(0)
    }

    pub fn last_caret(&self) -> usize {
        self.caret(self.selection_count() - 1)
    }

    pub fn first_selection(&self) -> TextCursor {
        self.selection(0)
    }

    pub fn last_selection(&self) -> TextCursor {
        self.selection(self.selection_count() - 1)
    }

    // =========================================================================
    // Text replacement
    // =========================================================================

    /// Replace the whole text. Cursors are kept, clamped to the new length.
    pub fn set_text(&mut self, text: &str) {
        self.set_text_chars(text.chars().collect());
    }

    pub fn set_text_chars(&mut self, text: Vec<char>) {
        self.set_text_with_edits(text, Vec::new());
    }

    /// Replace the whole text and re-map cursors through `edits`, which must
    /// describe how `text` was derived from the current buffer.
    pub fn set_text_with_edits(&mut self, text: Vec<char>, edits: Vec<TextEdit>) {
        self.buffer.set_chars(text);
        self.text_edited("set_text", edits);
    }

    // =========================================================================
    // Caret history
    // =========================================================================

    fn maybe_store_caret_locations(&mut self) {
        if self.store_caret_locations_next_edit {
            self.store_caret_locations();
            self.store_caret_locations_next_edit = false;
        }
    }

    /// Snapshot the current carets, dropping any redo tail
    pub fn store_caret_locations(&mut self) {
        self.history.store(self.selections.carets());
    }

    pub fn restore_previous_selections(&mut self) {
        let selections = &self.selections;
        let restored = self
            .history
            .previous(|| selections.carets())
            .map(|carets| carets.to_vec());
        if let Some(carets) = restored {
            self.restore_carets(&carets);
        }
    }

    pub fn restore_next_selections(&mut self) {
        let restored = self.history.next().map(|carets| carets.to_vec());
        if let Some(carets) = restored {
            self.restore_carets(&carets);
        }
    }

    fn restore_carets(&mut self, carets: &[usize]) {
        let len = self.buffer.len();
        let mut selections =
            CursorList::from_cursors(carets.iter().map(|&c| TextCursor::caret(c.min(len))));
        if selections.is_empty() {
            selections.merge(TextCursor::caret(0));
        }
        self.selections = selections;
        self.selection_changed();
    }

    // =========================================================================
    // Selection changes (no text change)
    // =========================================================================

    /// Collapse to a single caret at the first cursor's caret
    pub fn clear_selections(&mut self) {
        self.store_caret_locations_next_edit = true;
        let caret = self.first_caret();
        self.set_caret(caret);
    }

    pub fn set_caret(&mut self, index: usize) {
        self.store_caret_locations_next_edit = true;
        self.selections = CursorList::new();
        self.add_caret(index);
    }

    pub fn add_caret(&mut self, index: usize) {
        self.add_selection(TextCursor::caret(index));
    }

    pub fn add_selection(&mut self, selection: TextCursor) {
        self.store_caret_locations_next_edit = true;
        let selection = self.clamp_cursor(selection);
        self.selections.merge(selection);
        self.selection_changed();
    }

    pub fn set_selection(&mut self, selection: TextCursor) {
        self.store_caret_locations_next_edit = true;
        self.selections = CursorList::single(self.clamp_cursor(selection));
        self.selection_changed();
    }

    /// Replace every cursor. An empty input leaves a caret at 0.
    pub fn set_selections<I: IntoIterator<Item = TextCursor>>(&mut self, selections: I) {
        self.store_caret_locations_next_edit = true;
        let clamped: Vec<TextCursor> = selections
            .into_iter()
            .map(|s| self.clamp_cursor(s))
            .collect();
        self.selections = CursorList::from_cursors(clamped);
        if self.selections.is_empty() {
            self.add_caret(0);
        } else {
            self.selection_changed();
        }
    }

    pub fn select_all(&mut self) {
        let len = self.buffer.len();
        self.set_selection(TextCursor::new(len, -(len as isize)));
    }

    fn clamp_cursor(&self, cursor: TextCursor) -> TextCursor {
        let index = self.buffer.clamp(cursor.index);
        let other = self.buffer.clamp(cursor.other_end());
        TextCursor::from_to(other, index)
    }

    /// Add a caret derived from each existing caret
    pub fn add_carets<F: Fn(usize) -> usize>(&mut self, transform: F) {
        self.store_caret_locations_next_edit = true;
        let added = self.selections.transform(0, self.buffer.len(), transform);
        for cursor in added.iter() {
            self.selections.merge(*cursor);
        }
        self.selection_changed();
    }

    /// Move each caret, keeping its anchor so selections grow or shrink
    pub fn grow_selections<F: Fn(usize) -> usize>(&mut self, transform: F) {
        self.store_caret_locations_next_edit = true;
        self.selections = self
            .selections
            .transform_range(0, self.buffer.len(), transform);
        self.selection_changed();
    }

    /// Move each cursor as a whole
    pub fn move_selections<F: Fn(usize) -> usize>(&mut self, transform: F) {
        self.store_caret_locations_next_edit = true;
        self.selections = self
            .selections
            .transform(0, self.buffer.len(), transform);
        self.selection_changed();
    }

    fn add_carets_with(&mut self, f: IndexTransform) {
        let buffer = &self.buffer;
        let added = self.selections.transform(0, buffer.len(), |i| f(buffer, i));
        self.store_caret_locations_next_edit = true;
        for cursor in added.iter() {
            self.selections.merge(*cursor);
        }
        self.selection_changed();
    }

    /// Move every caret to `target`, carrying the selection along
    pub fn move_to(&mut self, target: MoveTarget) {
        let f = target.transform();
        let buffer = &self.buffer;
        self.selections = self.selections.transform(0, buffer.len(), |i| f(buffer, i));
        self.store_caret_locations_next_edit = true;
        self.selection_changed();
    }

    /// Move every caret to `target`, keeping anchors in place
    pub fn select_to(&mut self, target: MoveTarget) {
        let f = target.transform();
        let buffer = &self.buffer;
        self.selections = self
            .selections
            .transform_range(0, buffer.len(), |i| f(buffer, i));
        self.store_caret_locations_next_edit = true;
        self.selection_changed();
    }

    pub fn add_carets_up(&mut self) {
        self.add_carets_with(RuneBuffer::index_up);
    }

    pub fn add_carets_down(&mut self) {
        self.add_carets_with(RuneBuffer::index_down);
    }

    pub fn select_first(&mut self) {
        self.select_to(MoveTarget::First);
    }

    pub fn select_last(&mut self) {
        self.select_to(MoveTarget::Last);
    }

    pub fn select_left(&mut self) {
        self.select_to(MoveTarget::Left);
    }

    pub fn select_right(&mut self) {
        self.select_to(MoveTarget::Right);
    }

    pub fn select_up(&mut self) {
        self.select_to(MoveTarget::Up);
    }

    pub fn select_down(&mut self) {
        self.select_to(MoveTarget::Down);
    }

    pub fn select_home(&mut self) {
        self.select_to(MoveTarget::Home);
    }

    pub fn select_end(&mut self) {
        self.select_to(MoveTarget::End);
    }

    pub fn select_left_by_word(&mut self) {
        self.select_to(MoveTarget::WordLeft);
    }

    pub fn select_right_by_word(&mut self) {
        self.select_to(MoveTarget::WordRight);
    }

    pub fn move_first(&mut self) {
        self.move_to(MoveTarget::First);
    }

    pub fn move_last(&mut self) {
        self.move_to(MoveTarget::Last);
    }

    pub fn move_left(&mut self) {
        self.move_to(MoveTarget::Left);
    }

    pub fn move_right(&mut self) {
        self.move_to(MoveTarget::Right);
    }

    pub fn move_up(&mut self) {
        self.move_to(MoveTarget::Up);
    }

    pub fn move_down(&mut self) {
        self.move_to(MoveTarget::Down);
    }

    pub fn move_home(&mut self) {
        self.move_to(MoveTarget::Home);
    }

    pub fn move_end(&mut self) {
        self.move_to(MoveTarget::End);
    }

    pub fn move_left_by_word(&mut self) {
        self.move_to(MoveTarget::WordLeft);
    }

    pub fn move_right_by_word(&mut self) {
        self.move_to(MoveTarget::WordRight);
    }

    /// Collapse every selection to a caret at its start or end.
    /// Returns true if any selection was collapsed.
    pub fn deselect(&mut self, move_caret_to_start: bool) -> bool {
        let deselected = self.collapse_selections(move_caret_to_start);
        if deselected {
            self.store_caret_locations_next_edit = true;
        }
        deselected
    }

    /// Collapse after typing; the carets stay part of the current edit run
    fn collapse_selections(&mut self, move_caret_to_start: bool) -> bool {
        if self.selections.iter().all(|s| s.is_caret()) {
            return false;
        }
        self.selections = self
            .selections
            .iter()
            .map(|s| s.collapsed(move_caret_to_start))
            .collect();
        self.selection_changed();
        true
    }

    // =========================================================================
    // Text edits
    // =========================================================================

    /// Delete key: remove each selection, or the character right of each caret
    pub fn delete(&mut self) {
        self.maybe_store_caret_locations();
        let len = self.buffer.len();
        let mut text = self.buffer.chars().to_vec();
        let mut edits = Vec::new();
        for i in (0..self.selections.len()).rev() {
            let (start, end) = self.selections[i].range();
            if start == end {
                if end < len {
                    edits.push(splice(&mut text, start, start + 1, &[]));
                }
            } else {
                edits.push(splice(&mut text, start, end, &[]));
            }
            self.selections.set(i, TextCursor::caret(end));
        }
        self.buffer.set_chars(text);
        self.text_edited("delete", edits);
    }

    /// Backspace key: remove each selection, or the character left of each caret
    pub fn backspace(&mut self) {
        self.maybe_store_caret_locations();
        let mut text = self.buffer.chars().to_vec();
        let mut edits = Vec::new();
        for i in (0..self.selections.len()).rev() {
            let (start, end) = self.selections[i].range();
            if start == end {
                if start > 0 {
                    edits.push(splice(&mut text, start - 1, start, &[]));
                }
            } else {
                edits.push(splice(&mut text, start, end, &[]));
            }
            self.selections.set(i, TextCursor::caret(end));
        }
        self.buffer.set_chars(text);
        self.text_edited("backspace", edits);
    }

    /// Replace every selection with the text produced for it.
    ///
    /// Afterwards each cursor selects its replacement; carets that received
    /// text select it with the caret at the end.
    pub fn replace<F: FnMut(TextCursor) -> String>(&mut self, mut f: F) {
        self.replace_with("replace", |_, selection| f(selection).chars().collect());
    }

    pub fn replace_chars<F: FnMut(TextCursor) -> Vec<char>>(&mut self, mut f: F) {
        self.replace_with("replace", |_, selection| f(selection));
    }

    pub fn replace_all(&mut self, text: &str) {
        let chars: Vec<char> = text.chars().collect();
        self.replace_all_chars(&chars);
    }

    pub fn replace_all_chars(&mut self, text: &[char]) {
        self.replace_with("replace_all", |_, _| text.to_vec());
    }

    /// Core batch edit: `f` sees the pre-batch buffer and one selection.
    fn replace_with<F>(&mut self, op: &'static str, mut f: F)
    where
        F: FnMut(&RuneBuffer, TextCursor) -> Vec<char>,
    {
        self.maybe_store_caret_locations();
        let mut text = self.buffer.chars().to_vec();
        let mut edits = Vec::with_capacity(self.selections.len());
        for selection in self.selections.iter().rev() {
            let (start, end) = selection.range();
            let replacement = f(&self.buffer, *selection);
            edits.push(splice(&mut text, start, end, &replacement));
        }
        self.buffer.set_chars(text);
        self.text_edited(op, edits);
    }

    /// Type `text` at every cursor, leaving a caret after each insertion
    pub fn insert_text(&mut self, text: &str) {
        self.replace_all(text);
        self.collapse_selections(false);
    }

    pub fn replace_with_newline(&mut self) {
        self.replace_all("\n");
        self.collapse_selections(false);
    }

    /// Newline followed by the indentation of the line each selection starts on
    pub fn replace_with_newline_keep_indent(&mut self) {
        self.replace_with("newline", |buffer, selection| {
            let indent = buffer.line_indent(buffer.line_index(selection.start()));
            let mut replacement = Vec::with_capacity(indent + 1);
            replacement.push('\n');
            replacement.extend(spaces(indent));
            replacement
        });
        self.collapse_selections(false);
    }

    /// Insert `tab_width` spaces at the start of every line spanned by a
    /// selection
    pub fn indent_selection(&mut self, tab_width: usize) {
        self.maybe_store_caret_locations();
        let tab = spaces(tab_width);
        let buffer = &self.buffer;
        let mut text = buffer.chars().to_vec();
        let mut edits = Vec::new();
        for_each_selected_line(&self.selections, buffer, |line| {
            let line_start = buffer.line_start(line);
            edits.push(splice(&mut text, line_start, line_start, &tab));
        });
        self.set_text_edits("indent", text, edits);
    }

    /// Remove up to `tab_width` leading whitespace characters from every line
    /// spanned by a selection
    pub fn unindent_selection(&mut self, tab_width: usize) {
        self.maybe_store_caret_locations();
        let buffer = &self.buffer;
        let mut text = buffer.chars().to_vec();
        let mut edits = Vec::new();
        for_each_selected_line(&self.selections, buffer, |line| {
            let count = buffer.line_indent(line).min(tab_width);
            if count > 0 {
                let line_start = buffer.line_start(line);
                edits.push(splice(&mut text, line_start, line_start + count, &[]));
            }
        });
        self.set_text_edits("unindent", text, edits);
    }

    fn set_text_edits(&mut self, op: &'static str, text: Vec<char>, edits: Vec<TextEdit>) {
        self.buffer.set_chars(text);
        self.text_edited(op, edits);
    }

    // =========================================================================
    // Message dispatch
    // =========================================================================

    /// Apply a message using this controller's configuration
    pub fn apply(&mut self, msg: TextBoxMsg) {
        match msg {
            TextBoxMsg::Move(target) => self.move_to(target),
            TextBoxMsg::Select(target) => self.select_to(target),
            TextBoxMsg::AddCaretsUp => self.add_carets_up(),
            TextBoxMsg::AddCaretsDown => self.add_carets_down(),
            TextBoxMsg::SelectAll => self.select_all(),
            TextBoxMsg::Deselect { to_start } => {
                self.deselect(to_start);
            }
            TextBoxMsg::Insert(text) => self.insert_text(&text),
            TextBoxMsg::Newline => {
                if self.config.keep_indent_on_newline {
                    self.replace_with_newline_keep_indent();
                } else {
                    self.replace_with_newline();
                }
            }
            TextBoxMsg::Delete => self.delete(),
            TextBoxMsg::Backspace => self.backspace(),
            TextBoxMsg::Indent => self.indent_selection(self.config.tab_width),
            TextBoxMsg::Unindent => self.unindent_selection(self.config.tab_width),
            TextBoxMsg::RestorePrevious => self.restore_previous_selections(),
            TextBoxMsg::RestoreNext => self.restore_next_selections(),
        }
    }
}

/// Visit every line spanned by the selections, highest line first.
///
/// When a selection ends on the line where the previously visited (higher)
/// selection started, that line is skipped so it is only edited once.
fn for_each_selected_line(
    selections: &CursorList,
    buffer: &RuneBuffer,
    mut visit: impl FnMut(usize),
) {
    let mut last_line: Option<usize> = None;
    for selection in selections.iter().rev() {
        let (start, end) = selection.range();
        let first = buffer.line_index(start);
        let last = buffer.line_index(end);
        let lines = if last_line == Some(last) {
            first..last
        } else {
            first..last + 1
        };
        for line in lines.rev() {
            visit(line);
        }
        last_line = Some(first);
    }
}
