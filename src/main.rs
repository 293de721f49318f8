/// Demo host: a small book-catalog browser driven entirely by the
/// navigation library. Keys go through the KeyDispatcher, intents through
/// the NavigationProvider, and the table is just another GridHost.
use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::execute;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::{Frame, Terminal};

use vim_nav::config::Config;
use vim_nav::key_dispatcher::KeyDispatcher;
use vim_nav::logging::{self, LogRingBuffer};
use vim_nav::navigator::NavIntent;
use vim_nav::provider::{GridHost, NavigationProvider};
use vim_nav::table_view::TableView;

struct App {
    table: TableView,
    dispatcher: KeyDispatcher,
    log_buffer: LogRingBuffer,
    status: String,
    last_key: String,
    show_logs: bool,
    show_row_numbers: bool,
    show_key_indicator: bool,
}

impl App {
    fn new(config: &Config, log_buffer: LogRingBuffer) -> Result<Self> {
        let mut dispatcher = KeyDispatcher::from_config(&config.keybindings)?;
        dispatcher.set_label(NavIntent::NextRow, "Next book");
        dispatcher.set_label(NavIntent::PrevRow, "Previous book");
        dispatcher.set_label(NavIntent::LastRow, "Last book");
        dispatcher.set_label(NavIntent::FirstRow, "First book");
        Ok(Self {
            table: sample_catalog(),
            dispatcher,
            log_buffer,
            status: "j/k move, h/l columns, g/G first/last, Ctrl+F/B page, \
                     x hide, u unhide, </> reorder, F5 logs, q quit"
                .to_string(),
            last_key: String::new(),
            show_logs: false,
            show_row_numbers: config.display.show_row_numbers,
            show_key_indicator: config.display.show_key_indicator,
        })
    }

    /// Returns false when the app should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return true;
        }
        self.last_key = format!("{:?}", key.code);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::F(5) => {
                self.show_logs = !self.show_logs;
                return true;
            }
            KeyCode::Char('x') => {
                self.table.hide_selected_column();
                self.status = "Column hidden".to_string();
                return true;
            }
            KeyCode::Char('u') => {
                self.table.unhide_all_columns();
                self.status = "All columns restored".to_string();
                return true;
            }
            KeyCode::Char('<') => {
                if self.table.move_selected_column_left() {
                    self.status = "Column moved left".to_string();
                }
                return true;
            }
            KeyCode::Char('>') => {
                if self.table.move_selected_column_right() {
                    self.status = "Column moved right".to_string();
                }
                return true;
            }
            _ => {}
        }

        if let Some(intent) = self.dispatcher.dispatch(&key) {
            let label = self.dispatcher.label(intent).to_string();
            self.status = match self.table.navigate(intent) {
                Some(selection) => {
                    let column = self
                        .table
                        .header(selection.column)
                        .unwrap_or("?")
                        .to_string();
                    format!("{}: row {}, column '{}'", label, selection.row + 1, column)
                }
                None => format!("{}: no change", label),
            };
        }
        true
    }

    fn draw(&mut self, frame: &mut Frame) {
        let mut constraints = vec![Constraint::Min(5), Constraint::Length(1)];
        if self.show_logs {
            constraints.insert(1, Constraint::Length(10));
        }
        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(frame.area());

        self.draw_table(frame, areas[0]);
        if self.show_logs {
            self.draw_logs(frame, areas[1]);
        }
        self.draw_status(frame, *areas.last().expect("status area"));
    }

    fn draw_table(&mut self, frame: &mut Frame, area: Rect) {
        // Borders take 2 rows, the header takes 1
        let viewport_rows = area.height.saturating_sub(3).max(1) as usize;
        self.table.set_viewport_rows(viewport_rows);

        let columns = self.table.visible_column_indices().to_vec();
        let selected = self.table.selected();
        let offset = self.table.scroll_offset();

        let mut header_cells = Vec::new();
        if self.show_row_numbers {
            header_cells.push(Cell::from("#"));
        }
        for &column in &columns {
            header_cells.push(
                Cell::from(self.table.header(column).unwrap_or("?").to_string())
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            );
        }
        let header = Row::new(header_cells);

        let mut rows = Vec::with_capacity(viewport_rows);
        for row_index in offset..(offset + viewport_rows).min(self.table.row_count()) {
            let mut cells = Vec::with_capacity(columns.len() + 1);
            if self.show_row_numbers {
                cells.push(Cell::from(format!("{}", row_index + 1)));
            }
            for &column in &columns {
                let text = self.table.cell(row_index, column).unwrap_or("").to_string();
                let mut style = Style::default();
                if selected == Some((row_index, column)) {
                    style = style
                        .bg(Color::Yellow)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD);
                } else if selected.map(|(row, _)| row) == Some(row_index) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                cells.push(Cell::from(text).style(style));
            }
            rows.push(Row::new(cells));
        }

        let mut widths = Vec::new();
        if self.show_row_numbers {
            widths.push(Constraint::Length(4));
        }
        widths.extend(columns.iter().map(|_| Constraint::Min(10)));

        let title = format!(
            " Library ({} books, {} of {} columns) ",
            self.table.row_count(),
            columns.len(),
            self.table.column_count()
        );
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(table, area);
    }

    fn draw_logs(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .log_buffer
            .get_recent(area.height.saturating_sub(2) as usize)
            .iter()
            .map(|entry| Line::from(entry.format_for_display()))
            .collect();
        let logs = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Log "));
        frame.render_widget(logs, area);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let text = if self.show_key_indicator && !self.last_key.is_empty() {
            format!("{}  [{}]", self.status, self.last_key)
        } else {
            self.status.clone()
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::Cyan)),
            area,
        );
    }
}

fn sample_catalog() -> TableView {
    let headers = vec![
        "Title".to_string(),
        "Author".to_string(),
        "Series".to_string(),
        "Published".to_string(),
        "Rating".to_string(),
        "Tags".to_string(),
    ];
    let books = [
        ("The Fellowship of the Ring", "J.R.R. Tolkien", "The Lord of the Rings", "1954", "5", "fantasy"),
        ("The Two Towers", "J.R.R. Tolkien", "The Lord of the Rings", "1954", "5", "fantasy"),
        ("The Return of the King", "J.R.R. Tolkien", "The Lord of the Rings", "1955", "5", "fantasy"),
        ("Dune", "Frank Herbert", "Dune", "1965", "5", "sci-fi"),
        ("Dune Messiah", "Frank Herbert", "Dune", "1969", "4", "sci-fi"),
        ("Children of Dune", "Frank Herbert", "Dune", "1976", "4", "sci-fi"),
        ("Foundation", "Isaac Asimov", "Foundation", "1951", "5", "sci-fi"),
        ("Foundation and Empire", "Isaac Asimov", "Foundation", "1952", "4", "sci-fi"),
        ("Second Foundation", "Isaac Asimov", "Foundation", "1953", "4", "sci-fi"),
        ("The Colour of Magic", "Terry Pratchett", "Discworld", "1983", "4", "fantasy, humour"),
        ("Mort", "Terry Pratchett", "Discworld", "1987", "5", "fantasy, humour"),
        ("Guards! Guards!", "Terry Pratchett", "Discworld", "1989", "5", "fantasy, humour"),
        ("Neuromancer", "William Gibson", "Sprawl", "1984", "4", "cyberpunk"),
        ("Count Zero", "William Gibson", "Sprawl", "1986", "4", "cyberpunk"),
        ("Mona Lisa Overdrive", "William Gibson", "Sprawl", "1988", "3", "cyberpunk"),
        ("Snow Crash", "Neal Stephenson", "", "1992", "4", "cyberpunk"),
        ("Cryptonomicon", "Neal Stephenson", "", "1999", "5", "thriller"),
        ("The Left Hand of Darkness", "Ursula K. Le Guin", "Hainish Cycle", "1969", "5", "sci-fi"),
        ("The Dispossessed", "Ursula K. Le Guin", "Hainish Cycle", "1974", "5", "sci-fi"),
        ("A Wizard of Earthsea", "Ursula K. Le Guin", "Earthsea", "1968", "4", "fantasy"),
    ];
    let rows = books
        .iter()
        .map(|(title, author, series, published, rating, tags)| {
            vec![
                title.to_string(),
                author.to_string(),
                series.to_string(),
                published.to_string(),
                rating.to_string(),
                tags.to_string(),
            ]
        })
        .collect();
    TableView::new(headers, rows)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if !app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let log_buffer = logging::init_tracing();
    let config = Config::load().unwrap_or_default();

    let mut app = App::new(&config, log_buffer)?;
    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result
}
