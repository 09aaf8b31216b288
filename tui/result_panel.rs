use crate::datatable::impact_color;
use mutscore::studio::StudioState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Stylize,
    text::{Line, Text},
    widgets::{block::Title, Block, Paragraph, Widget, Wrap},
};

/// Right-hand panel with the latest scored result.
pub struct ResultPanel<'a> {
    pub studio: &'a StudioState,
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Title::from(" Prediction ".bold());
        let block = Block::bordered().title(title.alignment(Alignment::Center));

        let mut lines: Vec<Line> = vec![Line::from(self.studio.status.clone().italic())];
        if let (Some(res), Some(ctx)) = (&self.studio.last_result, &self.studio.last_context) {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                "Impact: ".into(),
                res.impact().as_str().fg(impact_color(res.impact())).bold(),
            ]));
            lines.push(Line::from(format!("Score: {:.1}", res.score())));
            lines.push(Line::from(format!(
                "Confidence: {:.0}%",
                res.confidence() * 100.0
            )));
            lines.push(Line::from(format!(
                "Region: {} ({}..) {}",
                ctx.region.as_str(),
                ctx.window_start,
                ctx.window
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(res.explanation().to_string()));
            lines.push(Line::from(""));
            for rec in res.recommendations() {
                lines.push(Line::from(vec!["• ".cyan(), rec.clone().into()]));
            }
        }

        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
