use mutscore::models::{Impact, MutationResult};
use mutscore::studio::StudioState;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Cell, HighlightSpacing, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table, TableState,
    },
    Frame,
};

const KEYS_TEXT: &str = "(q) quit | (↑/k ↓/j) move | (enter) score | (r) re-roll";
const STRIPE_BG: Color = Color::Rgb(28, 28, 36);

pub fn impact_color(impact: Impact) -> Color {
    match impact {
        Impact::Beneficial => Color::Green,
        Impact::Neutral => Color::Yellow,
        Impact::Detrimental => Color::Red,
    }
}

fn result_cells(result: Option<&MutationResult>) -> [Cell<'static>; 2] {
    match result {
        Some(res) => [
            Cell::from(Span::from(res.impact().as_str()).fg(impact_color(res.impact()))),
            Cell::from(format!("{:>5.1}", res.score())),
        ],
        None => [Cell::from("·".dark_gray()), Cell::from("")],
    }
}

/// Ratatui widget state for the candidate list. Selection is owned by
/// `StudioState` and copied in before every frame.
#[derive(Debug, Default, Clone)]
pub struct CandidateTable {
    table_state: TableState,
    scroll_state: ScrollbarState,
}

impl CandidateTable {
    pub fn draw(&mut self, frame: &mut Frame, area: Rect, studio: &StudioState) {
        self.table_state.select(studio.selected);
        self.scroll_state = self
            .scroll_state
            .content_length(studio.candidates.len())
            .position(studio.selected.unwrap_or(0));

        let [table_area, footer_area] =
            Layout::vertical([Constraint::Min(5), Constraint::Length(3)]).areas(area);

        let header = Row::new(["Gene", "Mutation", "Impact", "Score"])
            .style(Style::new().bold().underlined());
        let rows = studio.candidates.iter().enumerate().map(|(i, cand)| {
            let [impact, score] = result_cells(studio.result_for(i));
            let row = Row::new([
                Cell::from(cand.gene.clone()),
                Cell::from(cand.mutation.clone()),
                impact,
                score,
            ]);
            if i % 2 == 1 {
                row.bg(STRIPE_BG)
            } else {
                row
            }
        });
        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Length(9),
                Constraint::Length(12),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(Block::bordered().title(" Candidates "))
        .highlight_style(Style::new().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ")
        .highlight_spacing(HighlightSpacing::Always);
        frame.render_stateful_widget(table, table_area, &mut self.table_state);

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            table_area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut self.scroll_state,
        );

        let n_scored = studio.scored.iter().filter(|x| x.is_some()).count();
        let footer = Paragraph::new(vec![Line::from(format!(
            "scored {}/{}  {}",
            n_scored,
            studio.candidates.len(),
            KEYS_TEXT
        ))])
        .centered()
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::new().cyan()),
        );
        frame.render_widget(footer, footer_area);
    }
}
