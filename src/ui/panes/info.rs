//! Algorithm details, current step description, legend and last-run stats

use crate::snapshot::{Highlight, Step};
use crate::sorting::AlgorithmInfo;
use crate::ui::app::RunStats;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Data shown in the info pane
pub struct InfoRenderData<'a> {
    pub info: &'a AlgorithmInfo,
    pub step: Option<&'a Step>,
    pub input_len: usize,
    pub speed: u16,
    pub last_run: Option<&'a RunStats>,
}

fn label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(DEFAULT_THEME.comment))
}

fn legend_entry(name: &'static str, highlight: Highlight) -> Vec<Span<'static>> {
    vec![
        Span::styled("■", Style::default().fg(DEFAULT_THEME.bar_color(highlight))),
        Span::styled(
            format!(" {}  ", name),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ]
}

/// Render the info pane
pub fn render_info_pane(frame: &mut Frame, area: Rect, data: &InfoRenderData<'_>) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = vec![
        Line::from(vec![
            label("Complexity: "),
            Span::styled(
                data.info.time_complexity,
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
            label("   Memory: "),
            Span::styled(
                data.info.space_complexity,
                Style::default()
                    .fg(DEFAULT_THEME.type_name)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Elements: "),
            Span::styled(
                data.input_len.to_string(),
                Style::default().fg(DEFAULT_THEME.number),
            ),
            label("   Speed: "),
            Span::styled(data.speed.to_string(), Style::default().fg(DEFAULT_THEME.number)),
        ]),
        Line::from(""),
    ];

    let summary = data.step.map(Step::summary).unwrap_or_default();
    lines.push(Line::from(vec![
        label("Step: "),
        Span::styled(summary, Style::default().fg(DEFAULT_THEME.fg)),
    ]));
    lines.push(Line::from(""));

    let mut legend = Vec::new();
    legend.extend(legend_entry("Idle", Highlight::Idle));
    legend.extend(legend_entry("Compare", Highlight::Comparison));
    legend.extend(legend_entry("Swap", Highlight::Swap));
    legend.extend(legend_entry("Sorted", Highlight::Sorted));
    lines.push(Line::from(legend));

    if let Some(stats) = data.last_run {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            label("Last run: "),
            Span::styled(stats.algorithm.name(), Style::default().fg(DEFAULT_THEME.function)),
            label(" took "),
            Span::styled(
                stats.steps.to_string(),
                Style::default().fg(DEFAULT_THEME.number),
            ),
            label(" steps"),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
