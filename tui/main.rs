use clap::Parser;
use crossterm::event::{self, poll, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{DefaultTerminal, Frame};
use std::path::PathBuf;
use std::time::Duration;

use mutscore::config::RunConfig;
use mutscore::errors::MutScoreError;
use mutscore::notation::mutation_notation::MutationParser;
use mutscore::protein::catalog::GeneCatalog;
use mutscore::scoring::scorer::MockMutationScorer;
use mutscore::studio::{StudioMessage, StudioState};

mod datatable;
mod result_panel;

use datatable::CandidateTable;
use result_panel::ResultPanel;

#[derive(Parser)]
#[command(author, version, about = "Interactive mutation design studio", long_about = None)]
struct Cli {
    /// Gene catalog (JSON, or FASTA by extension). Defaults to the demo catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Optional path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,
}

/// Terminal front-end. Everything it shows comes from `studio`; the
/// remaining fields are the services `StudioState::update` needs.
pub struct App {
    studio: StudioState,
    candidate_table: CandidateTable,
    scorer: MockMutationScorer,
    catalog: GeneCatalog,
    parser: MutationParser,
}

impl App {
    fn new(catalog: GeneCatalog, seed: Option<u64>) -> Result<Self, MutScoreError> {
        Ok(Self {
            studio: StudioState::from_catalog(&catalog),
            candidate_table: CandidateTable::default(),
            scorer: MockMutationScorer::from_seed_option(seed),
            catalog,
            parser: MutationParser::new()?,
        })
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> std::io::Result<()> {
        terminal.draw(|frame| self.draw(frame))?;
        while !self.studio.exiting {
            let Some(msg) = self.handle_events() else {
                continue;
            };
            let should_redraw =
                self.studio
                    .update(msg, &mut self.scorer, &self.catalog, &self.parser);
            if should_redraw {
                terminal.draw(|frame| self.draw(frame))?;
            }
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
                .areas(frame.area());
        self.candidate_table.draw(frame, left, &self.studio);
        frame.render_widget(
            ResultPanel {
                studio: &self.studio,
            },
            right,
        );
    }

    // TECHNICALLY this does not handle them ... more accurately it dispatches them.
    fn handle_events(&self) -> Option<StudioMessage> {
        match poll(Duration::from_millis(100)) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                log::error!("Error polling events: {:?}", e);
                return None;
            }
        }

        match event::read() {
            // it's important to check that the event is a key press event as
            // crossterm also emits key release and repeat events on Windows.
            Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                handle_key_event(key_event)
            }
            Ok(_) => None,
            Err(e) => {
                log::error!("Error reading event: {:?}", e);
                None
            }
        }
    }
}

fn handle_key_event(key_event: KeyEvent) -> Option<StudioMessage> {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(StudioMessage::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(StudioMessage::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(StudioMessage::MoveUp),
        KeyCode::Enter => Some(StudioMessage::Score),
        KeyCode::Char('r') => Some(StudioMessage::Reroll),
        _ => None,
    }
}

fn main() -> Result<(), MutScoreError> {
    env_logger::init();
    let cli = Cli::parse();
    let config =
        RunConfig::load(cli.config_file.as_deref())?.with_overrides(cli.seed, None, cli.catalog);
    let catalog = match &config.catalog {
        Some(path) => GeneCatalog::from_path(path)?,
        None => GeneCatalog::demo()?,
    };

    let mut app = App::new(catalog, config.seed)?;
    let mut terminal = ratatui::init();
    let app_result = app.run(&mut terminal);
    ratatui::restore();
    Ok(app_result?)
}
