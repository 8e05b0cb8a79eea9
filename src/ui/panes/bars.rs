//! Bar chart of the current step
//!
//! One bar per array element, colored by the step's highlight sets with the
//! priority sorted > swap > comparison > idle.

use crate::snapshot::{Highlight, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

const BAR_GAP: u16 = 1;

/// Bar heights are shifted so the smallest value still draws a sliver.
/// Negative inputs are allowed for comparison sorts.
fn bar_heights(values: &[i32]) -> Vec<u64> {
    let floor = values.iter().copied().min().unwrap_or(0).min(0) as i64;
    values
        .iter()
        .map(|&v| (v as i64 - floor + 1) as u64)
        .collect()
}

/// Width of each bar so that `count` bars fit across `inner_width` columns
fn bar_width(inner_width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let count = count as u16;
    let gaps = BAR_GAP.saturating_mul(count.saturating_sub(1));
    (inner_width.saturating_sub(gaps) / count).max(1)
}

/// Render the visualization pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&Step>,
    is_complete: bool,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let mut block = Block::default()
        .title(" Visualization ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if is_complete {
        block = block.title(
            Title::from(Line::from(Span::styled(
                " SORT COMPLETE ",
                Style::default()
                    .bg(DEFAULT_THEME.success)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Right),
        );
    }

    let step = match step {
        Some(step) if !step.is_empty() => step,
        _ => {
            let paragraph = Paragraph::new("(empty array)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let highlights = step.highlights();
    let heights = bar_heights(&step.array);
    let width = bar_width(area.width.saturating_sub(2), step.len());

    let bars: Vec<Bar> = step
        .array
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(index, (&value, height))| {
            let highlight = highlights.get(&index).copied().unwrap_or(Highlight::Idle);
            let color = DEFAULT_THEME.bar_color(highlight);
            Bar::default()
                .value(height)
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().bg(color).fg(Color::Black))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(BAR_GAP);

    frame.render_widget(chart, area);
}
