//! Soft wrapping for the editor and results panel
//!
//! Widths are terminal cell widths (`unicode-width`), not byte or char
//! counts.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Tab stops in the editor, in cells
pub const TAB_WIDTH: usize = 4;

/// Cells `c` takes when it starts at `col`. Tabs advance to the next tab
/// stop (capped at the row width); other control characters take none.
fn cell_width(c: char, col: usize, width: usize) -> usize {
    match c {
        '\t' => (TAB_WIDTH - col % TAB_WIDTH).min(width),
        c if c.is_control() => 0,
        c => c.width().unwrap_or(0),
    }
}

/// Draft text broken into screen rows, with the cursor's row and column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedDraft {
    pub rows: Vec<String>,
    pub cursor_row: usize,
    pub cursor_col: usize,
}

/// Wrap `text` at `width` cells, breaking anywhere so every character
/// (including spaces) keeps its place and the cursor can be mapped exactly.
/// Tabs are expanded to spaces and other control characters are dropped,
/// so rows hold exactly what the terminal will draw.
///
/// `cursor` is a byte offset on a character boundary.
pub fn wrap_draft(text: &str, cursor: usize, width: usize) -> WrappedDraft {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut cursor_at = (0, 0);
    let mut offset = 0;

    for line in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;

        for (i, c) in line.char_indices() {
            let mut w = cell_width(c, row_width, width);
            if row_width + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
                w = cell_width(c, row_width, width);
            }
            if offset + i == cursor {
                cursor_at = (rows.len(), row_width);
            }
            match c {
                '\t' => row.extend(std::iter::repeat_n(' ', w)),
                c if c.is_control() => {}
                c => row.push(c),
            }
            row_width += w;
        }

        if offset + line.len() == cursor {
            // Cursor after a full row starts the next one
            if row_width >= width {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            cursor_at = (rows.len(), row_width);
        }

        rows.push(row);
        offset += line.len() + 1;
    }

    WrappedDraft {
        rows,
        cursor_row: cursor_at.0,
        cursor_col: cursor_at.1,
    }
}

/// Greedy word wrap for display text.
///
/// Whitespace runs collapse to single spaces; a word wider than `width` is
/// split across rows. Always returns at least one row.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();

    for word in text.split_whitespace() {
        let word_width = word.width();
        let row_width = row.width();

        if !row.is_empty() && row_width + 1 + word_width <= width {
            row.push(' ');
            row.push_str(word);
            continue;
        }

        if !row.is_empty() {
            rows.push(std::mem::take(&mut row));
        }

        if word_width <= width {
            row.push_str(word);
        } else {
            let mut piece_width = 0;
            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if piece_width + w > width && !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                    piece_width = 0;
                }
                row.push(c);
                piece_width += w;
            }
        }
    }

    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}
