//! Detail Widget
//!
//! The pane for one theme:
//!
//! ```text
//! ╭ ← Back to Platform ───────────────────────────╮
//! │Vertical       Systems Pane            History │
//! │Navigation                             Bridge  │
//! │(Levels)                               ●       │
//! │                                       ●       │
//! │Conditions                         Study Tools │
//! │ Horizontal Navigation (Themes within levels)  │
//! ╰───────────────────────────────────────────────╯
//! ```

use omnipository_core::DetailModel;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap};

use crate::theme::{faded, MARKER};

/// Width of the side rails
const RAIL_WIDTH: u16 = 14;

/// Draws a [`DetailModel`]
pub struct DetailWidget<'a> {
    model: &'a DetailModel,
}

impl<'a> DetailWidget<'a> {
    /// Draw `model`
    #[must_use]
    pub fn new(model: &'a DetailModel) -> Self {
        Self { model }
    }
}

/// One word per line, for the narrow rails
fn stacked(label: &str) -> Vec<Line<'_>> {
    label.split_whitespace().map(Line::from).collect()
}

impl Widget for DetailWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let model = self.model;
        let opacity = model.style.opacity;
        let base = Style::default()
            .bg(faded(model.palette.background, opacity))
            .fg(faded(model.palette.text, opacity));
        let strong = base.add_modifier(Modifier::BOLD);

        Clear.render(area, buf);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(base.fg(faded(model.palette.shadow.rgb, opacity)))
            .style(base)
            .title(Line::styled(format!(" {} ", model.back_label), strong));
        let inner = block.inner(area);
        block.render(area, buf);

        let [body, bottom] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        let [left, center, right] = Layout::horizontal([
            Constraint::Length(RAIL_WIDTH),
            Constraint::Min(1),
            Constraint::Length(RAIL_WIDTH),
        ])
        .areas(body);

        Paragraph::new(stacked(model.level_nav_label))
            .style(base)
            .render(left, buf);

        let mut history = stacked(model.history_label);
        history.push(Line::default());
        history.extend(
            (0..model.history_markers).map(|_| Line::styled("●", base.fg(faded(MARKER, opacity)))),
        );
        Paragraph::new(history)
            .style(base)
            .alignment(Alignment::Right)
            .render(right, buf);

        let [heading, _, corners] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(center);
        Paragraph::new(Line::styled(model.pane_title.as_str(), strong))
            .alignment(Alignment::Center)
            .render(heading, buf);
        let [corner_left, corner_right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(corners);
        Paragraph::new(model.conditions_label).render(corner_left, buf);
        Paragraph::new(model.study_tools_label)
            .alignment(Alignment::Right)
            .render(corner_right, buf);

        Paragraph::new(Text::from(model.theme_nav_label))
            .style(base)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(bottom, buf);
    }
}
