//! Full-screen terminal front end for the dashboard.

use std::io::{self, Stdout};

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Paragraph, Row, Table};
use ratatui::{Frame, Terminal};
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::board::BoardRow;
use crate::realtime::{RealtimeApi, Station};

use super::error::DashboardError;
use super::state::{Dashboard, DashboardConfig, LoopState, Signal, Surface};

/// Lines taken by the title above the table.
const TITLE_HEIGHT: u16 = 2;

/// The real terminal, in raw mode on the alternate screen.
///
/// The terminal is handed back to the shell when this is dropped, whatever
/// path the program leaves by.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSurface {
    /// Take over the terminal.
    pub fn new() -> Result<Self, DashboardError> {
        enable_raw_mode().map_err(DashboardError::DisplayInit)?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(DashboardError::DisplayInit(e));
        }

        let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal();
                return Err(DashboardError::DisplayInit(e));
            }
        };
        if let Err(e) = terminal.hide_cursor() {
            debug!(error = %e, "could not hide cursor");
        }

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        restore_terminal();
        let _ = self.terminal.show_cursor();
    }
}

impl std::fmt::Debug for TerminalSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSurface").finish_non_exhaustive()
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> io::Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    fn draw(&mut self, title: &str, rows: &[BoardRow]) -> io::Result<()> {
        self.terminal.draw(|frame| render_board(frame, title, rows))?;
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }
}

/// Leave the alternate screen and raw mode. Errors are ignored; there is
/// nothing left to report them on.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn render_board(frame: &mut Frame, title: &str, rows: &[BoardRow]) {
    let [title_area, table_area] =
        Layout::vertical([Constraint::Length(TITLE_HEIGHT), Constraint::Min(0)])
            .areas(frame.area());

    let title = Paragraph::new(title).style(Style::default().fg(Color::Green));
    frame.render_widget(title, title_area);

    let widths = [
        Constraint::Fill(3),
        Constraint::Length(9),
        Constraint::Length(14),
        Constraint::Length(8),
        Constraint::Fill(3),
        Constraint::Length(11),
        Constraint::Fill(4),
    ];
    let header_style = Style::default().add_modifier(Modifier::BOLD);
    let table_rows = rows.iter().enumerate().map(|(i, row)| {
        let cells = Row::new(row.cells());
        if i == 0 { cells.style(header_style) } else { cells }
    });
    frame.render_widget(Table::new(table_rows, widths).column_spacing(1), table_area);
}

/// Map a terminal event to a dashboard signal. Events the dashboard does
/// not care about map to `None`.
pub fn signal_for(event: &Event) -> Option<Signal> {
    match event {
        Event::Resize(width, height) => Some(Signal::Resize {
            width: *width,
            height: *height,
        }),
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Signal::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Signal::Quit)
            }
            _ => None,
        },
        _ => None,
    }
}

/// Show the board for `station` until the user quits.
///
/// Takes over the terminal for the duration. Timer ticks and terminal
/// events are handled one at a time; a fetch triggered by a tick finishes
/// before the next event is looked at.
pub async fn run<C: RealtimeApi>(
    client: C,
    station: Station,
    config: DashboardConfig,
) -> Result<(), DashboardError> {
    let mut surface = TerminalSurface::new()?;
    let tick = config.tick;
    let mut dashboard = Dashboard::start(client, station, config, &mut surface).await?;

    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The board was drawn by start; wait a full period for the first tick.
    ticker.tick().await;

    while dashboard.state() != LoopState::Terminated {
        let signal = tokio::select! {
            _ = ticker.tick() => Signal::Tick,
            event = events.next() => match event {
                Some(Ok(event)) => match signal_for(&event) {
                    Some(signal) => signal,
                    None => continue,
                },
                Some(Err(e)) => return Err(DashboardError::Terminal(e)),
                None => Signal::Quit,
            },
        };
        dashboard.handle(signal, &mut surface).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn quit_keys() {
        assert_eq!(signal_for(&key(KeyCode::Esc, KeyModifiers::NONE)), Some(Signal::Quit));
        assert_eq!(
            signal_for(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Signal::Quit)
        );
        assert_eq!(
            signal_for(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Signal::Quit)
        );
    }

    #[test]
    fn other_keys_ignored() {
        assert_eq!(signal_for(&key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
        assert_eq!(signal_for(&key(KeyCode::Enter, KeyModifiers::NONE)), None);
        assert_eq!(signal_for(&Event::FocusGained), None);
    }

    #[test]
    fn key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(signal_for(&release), None);
    }

    #[test]
    fn resize_carries_dimensions() {
        assert_eq!(
            signal_for(&Event::Resize(100, 30)),
            Some(Signal::Resize {
                width: 100,
                height: 30
            })
        );
    }

    #[test]
    fn render_board_draws_title_and_rows() {
        use ratatui::backend::TestBackend;

        let mut terminal = Terminal::new(TestBackend::new(100, 8)).unwrap();
        let rows = vec![
            BoardRow::header(),
            BoardRow::separator(),
            BoardRow {
                destination: "Greystones".to_string(),
                due: "4 mins".to_string(),
                ..Default::default()
            },
        ];

        terminal
            .draw(|frame| {
                render_board(frame, "Dublin Connolly (Last update: 3 seconds ago)", &rows)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let line = |y: u16| -> String {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(line(0).starts_with("Dublin Connolly (Last update: 3 seconds ago)"));
        assert!(line(2).starts_with("Destination"));
        assert!(line(4).starts_with("Greystones"));
        assert!(line(4).contains("4 mins"));
    }
}
