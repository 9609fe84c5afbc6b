//! Results panel widget
//!
//! Shows the last failure (if any) above the last successful analysis, or a
//! hint when there is nothing to show yet.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use scrivi_app::{AnalysisState, ResultsViewState};
use scrivi_core::{AnalysisFailure, AnalysisView};

use crate::theme::{palette, styles};
use crate::wrap::wrap_words;

pub const HEADING_ANALYSIS: &str = "Analysis";
pub const HEADING_NATURE: &str = "Nature of text";
pub const HEADING_SUMMARY: &str = "Summary";

pub const LABEL_SENTENCES: &str = "Number of sentences";
pub const LABEL_WORDS: &str = "Number of words";
pub const LABEL_STOPWORDS: &str = "Stopwords used";

const HINT_EMPTY: &str = "Write something, then press Ctrl+S to analyse it.";
const HINT_BUSY: &str = "Analysing your draft...";

const SENTIMENT_PREFIX: &str = "It sounds ";

pub struct AnalysisPanel<'a> {
    analysis: &'a AnalysisState,
    focused: bool,
}

impl<'a> AnalysisPanel<'a> {
    pub fn new(analysis: &'a AnalysisState) -> Self {
        Self {
            analysis,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Every content line, wrapped to `width`
    fn build_lines(&self, width: usize) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        if let Some(failure) = &self.analysis.failure {
            error_lines(failure, width, &mut lines);
        }

        match &self.analysis.view {
            Some(view) => view_lines(view, width, &mut lines),
            None if self.analysis.failure.is_none() => {
                let hint = if self.analysis.is_busy() {
                    HINT_BUSY
                } else {
                    HINT_EMPTY
                };
                for row in wrap_words(hint, width) {
                    lines.push(Line::styled(row, styles::text_muted()));
                }
            }
            None => {}
        }

        lines
    }
}

fn error_lines<'a>(failure: &AnalysisFailure, width: usize, lines: &mut Vec<Line<'a>>) {
    lines.push(Line::from(vec![
        Span::styled("✗ ", styles::status_red()),
        Span::styled(
            failure.kind.heading(),
            styles::status_red().add_modifier(Modifier::BOLD),
        ),
    ]));
    for row in wrap_words(&failure.message, width.saturating_sub(2)) {
        lines.push(Line::styled(format!("  {}", row), styles::text_secondary()));
    }
    lines.push(Line::styled("  Esc to dismiss", styles::text_muted()));
    lines.push(Line::default());
}

fn view_lines<'a>(view: &AnalysisView, width: usize, lines: &mut Vec<Line<'a>>) {
    lines.push(Line::styled(HEADING_ANALYSIS, styles::heading()));
    for (label, value) in [
        (LABEL_SENTENCES, view.stats.sentences),
        (LABEL_WORDS, view.stats.words),
        (LABEL_STOPWORDS, view.stats.stopwords),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", label), styles::text_secondary()),
            Span::styled(value.to_string(), styles::text_primary()),
        ]));
    }
    lines.push(Line::default());

    lines.push(Line::styled(HEADING_NATURE, styles::heading()));
    sentiment_lines(view, width, lines);
    if let Some(sentence) = view.intent_sentence() {
        for row in wrap_words(&sentence, width) {
            lines.push(Line::styled(row, styles::text_primary()));
        }
    }
    lines.push(Line::default());

    lines.push(Line::styled(HEADING_SUMMARY, styles::heading()));
    for sentence in &view.summary {
        for (i, row) in wrap_words(sentence, width.saturating_sub(2))
            .into_iter()
            .enumerate()
        {
            let bullet = if i == 0 { "• " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(bullet, styles::accent()),
                Span::styled(row, styles::text_primary()),
            ]));
        }
    }
}

/// "It sounds {label}" wrapped to `width`, with only the label colored
fn sentiment_lines<'a>(view: &AnalysisView, width: usize, lines: &mut Vec<Line<'a>>) {
    let text = format!("{}{}", SENTIMENT_PREFIX, view.sentiment.label);
    let label_style = styles::sentiment(view.sentiment.tone);
    let style_for = |label: bool| {
        if label {
            label_style
        } else {
            styles::text_primary()
        }
    };
    // Wrapping drops whitespace only, so non-space chars map back in order
    let mut prefix_left = SENTIMENT_PREFIX.chars().filter(|c| !c.is_whitespace()).count();

    for row in wrap_words(&text, width) {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut in_label = prefix_left == 0;

        for c in row.chars() {
            let is_label = if c.is_whitespace() {
                in_label
            } else if prefix_left > 0 {
                prefix_left -= 1;
                false
            } else {
                true
            };
            if is_label != in_label && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), style_for(in_label)));
            }
            in_label = is_label;
            run.push(c);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, style_for(in_label)));
        }
        lines.push(Line::from(spans));
    }
}

impl StatefulWidget for AnalysisPanel<'_> {
    type State = ResultsViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let title_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let block = styles::glass_block(self.focused)
            .title(Span::styled(" Results ", title_style))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let lines = self.build_lines(inner.width as usize);
        state.update_content_size(lines.len(), inner.height as usize);

        let visible: Vec<Line> = lines
            .into_iter()
            .skip(state.offset)
            .take(inner.height as usize)
            .collect();
        Paragraph::new(visible).render(inner, buf);

        // Scroll hint when content continues below
        if state.offset + (inner.height as usize) < state.total_lines {
            let hint = Span::styled(" ↓ more ", styles::text_muted());
            let x = area.x + area.width.saturating_sub(hint.width() as u16 + 2);
            buf.set_span(x, area.y + area.height - 1, &hint, hint.width() as u16);
        }
    }
}
