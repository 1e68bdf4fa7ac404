//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use returndesk_config::Config;
use returndesk_protocol::{Message, RequestStore, Summary, ViewKind, client_rows};
use tracing::{debug, info};

use crate::{
    AppState, Focus,
    event::{editor_event_to_message, event_to_message, poll_event},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH},
    state::EditorField,
    terminal::AppTerminal,
    widgets::{
        BucketHit, board_hit, client_row_at, editor_modal_area, render_board,
        render_client_table, render_editor, render_help_overlay, render_type_picker, star_hit,
        summary_line,
    },
};

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for click hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render (affects click hit-testing).
    header_visible: bool,
    /// The application configuration.
    config: Config,
}

impl App {
    /// Creates a new application over a request store with the default
    /// configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_protocol::dummy::dummy_store;
    /// use returndesk_tui::App;
    ///
    /// let app = App::new(dummy_store());
    /// assert!(!app.should_quit());
    /// ```
    #[must_use]
    pub fn new(store: RequestStore) -> Self {
        Self::with_config(store, Config::default())
    }

    /// Creates a new application with the given configuration.
    ///
    /// The configured role decides whether the board or the client table is
    /// shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_config::Config;
    /// use returndesk_protocol::{Role, ViewKind, dummy::dummy_store};
    /// use returndesk_tui::App;
    ///
    /// let config = Config {
    ///     role: Role::Client,
    ///     ..Config::default()
    /// };
    /// let app = App::with_config(dummy_store(), config);
    /// assert_eq!(app.state().view(), ViewKind::ClientTable);
    /// ```
    #[must_use]
    pub fn with_config(store: RequestStore, config: Config) -> Self {
        Self {
            state: AppState::new(store, config.role),
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            config,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether the application has been asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, most messages are intercepted to
    /// dismiss the help instead of their normal action. Only `Quit`,
    /// `ToggleHelp` and `Escape` work normally when help is shown.
    ///
    /// Otherwise the message goes to whichever component has focus: the
    /// detail editor, the type picker, or the main view.
    pub fn update(&mut self, msg: Message) {
        if self.state.help_visible {
            match msg {
                Message::Quit => self.should_quit = true,
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                _ => {
                    self.state.dismiss_help();
                }
            }
            return;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
                return;
            }
            Message::ToggleHelp => {
                self.state.toggle_help();
                return;
            }
            _ => {}
        }

        match self.state.focus() {
            Focus::Editor => self.update_editor(msg),
            Focus::Creation => self.update_creation(msg),
            Focus::Main => self.update_main(msg),
        }
    }

    fn update_main(&mut self, msg: Message) {
        match msg {
            Message::NavigateLeft if self.state.view() == ViewKind::Board => {
                self.state.navigate_left();
            }
            Message::NavigateRight if self.state.view() == ViewKind::Board => {
                self.state.navigate_right();
            }
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::Select => self.open_selected(),
            Message::ToggleExpand if self.state.view() == ViewKind::Board => {
                let expanded = self.state.toggle_expand();
                debug!(kind = ?self.state.selected_kind(), expanded, "toggled bucket");
            }
            Message::NewRequest => {
                self.state.start_creation();
                debug!("opened type picker");
            }
            Message::Escape | Message::Back => self.state.clear_selection(),
            Message::ClickAt { column, row } => self.handle_click(column, row),
            _ => {}
        }
    }

    fn update_creation(&mut self, msg: Message) {
        match msg {
            Message::NavigateLeft | Message::NavigateUp => self.state.creation.cycle_type(false),
            Message::NavigateRight | Message::NavigateDown => self.state.creation.cycle_type(true),
            Message::Select => {
                if self.state.submit_creation() {
                    info!(state = ?self.state.dispatch.state(), "opened editor for new request");
                }
            }
            Message::Escape | Message::Back => {
                self.state.creation.cancel();
                debug!("cancelled new request");
            }
            _ => {}
        }
    }

    fn update_editor(&mut self, msg: Message) {
        match msg {
            Message::Escape | Message::Back => {
                self.state.close_editor();
                debug!("closed editor");
            }
            Message::NextField => self.state.next_field(),
            Message::SetRating { stars } => {
                self.state.set_rating(stars);
            }
            Message::NotesInput { ch } => {
                self.state.type_note(ch);
            }
            Message::NotesBackspace => {
                self.state.delete_note_char();
            }
            Message::NavigateUp => self.state.navigate_line(false),
            Message::NavigateDown => self.state.navigate_line(true),
            Message::CycleDamage { forward } => {
                self.state.cycle_damage(forward);
            }
            Message::RequestAttachment => self.state.request_attachment(),
            Message::ClickAt { column, row } => {
                let area = self.last_area;
                let stars = self
                    .state
                    .dispatch
                    .editor()
                    .and_then(|editor| star_hit(editor_modal_area(area, editor), column, row));
                if let Some(stars) = stars {
                    self.state.set_rating(stars);
                }
            }
            _ => {}
        }
    }

    /// Opens the editor for the request under the cursor, if any.
    fn open_selected(&mut self) {
        if let Some(state) = self.state.open_selected() {
            info!(
                id = self.state.dispatch.selected_request().map(|r| r.id.as_str()),
                ?state,
                "opened editor"
            );
        }
    }

    /// Returns the area below the header, as laid out by the last render.
    fn content_area(&self) -> Rect {
        let header_offset = if self.header_visible {
            HEADER_HEIGHT
        } else {
            0
        };
        Rect {
            x: self.last_area.x,
            y: self.last_area.y + header_offset,
            width: self.last_area.width,
            height: self.last_area.height.saturating_sub(header_offset),
        }
    }

    /// Handles a mouse click on the main view.
    ///
    /// A click on a card or row opens its editor; a click on a bucket footer
    /// expands or collapses that bucket.
    fn handle_click(&mut self, column: u16, row: u16) {
        let area = self.content_area();
        if !area.contains((column, row).into()) {
            return;
        }

        match self.state.view() {
            ViewKind::Board => {
                let hit = {
                    let buckets = self.state.store.buckets();
                    board_hit(
                        &buckets,
                        &self.state.buckets,
                        self.state.selected_bucket,
                        self.state.selected_card,
                        area,
                        column,
                        row,
                    )
                };
                match hit {
                    Some((kind, BucketHit::Card(card))) => {
                        if self.state.select_card(kind.index(), card) {
                            self.open_selected();
                        }
                    }
                    Some((kind, BucketHit::Footer)) => {
                        if self.state.selected_bucket != kind.index() {
                            self.state.selected_bucket = kind.index();
                            self.state.selected_card = None;
                        }
                        self.state.toggle_expand();
                    }
                    None => {}
                }
            }
            ViewKind::ClientTable => {
                let hit = client_row_at(self.state.row_count(), area, column, row);
                if hit.is_some_and(|idx| self.state.select_row(idx)) {
                    self.open_selected();
                }
            }
        }
    }

    /// Renders the current state to the terminal frame.
    ///
    /// In order: the header, the board or client table, then the type
    /// picker, the editor and the help overlay on top.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render into.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        // Check if terminal is too small for any useful rendering
        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let content_area = if show_header {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                .split(area);

            self.render_header(frame, chunks[0]);
            chunks[1]
        } else {
            area
        };

        match self.state.view() {
            ViewKind::Board => self.render_board_area(frame, content_area),
            ViewKind::ClientTable => self.render_client_area(frame, content_area),
        }

        let buf = frame.buffer_mut();
        if let Some(draft) = self.state.creation.draft() {
            render_type_picker(draft, area, buf);
        }
        if let Some(editor) = self.state.dispatch.editor() {
            render_editor(
                editor,
                self.state.editor_field,
                self.state.selected_line,
                area,
                buf,
            );
        }
        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use returndesk_protocol::dummy::dummy_store;
    /// use returndesk_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(dummy_store());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        info!(role = self.config.role.as_str(), requests = self.state.store.len(), "starting");

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                // The editor owns the keyboard while it is open.
                let msg = if self.state.focus() == Focus::Editor {
                    editor_event_to_message(&event, self.state.editor_field == EditorField::Notes)
                } else {
                    event_to_message(&event)
                };

                if let Some(msg) = msg {
                    self.update(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!("quitting");
        Ok(())
    }

    /// Renders the header with title, summary line and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [top_area, summary_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(top_area);

        let view_name = match self.state.view() {
            ViewKind::Board => "Triage Board",
            ViewKind::ClientTable => "Your Returns",
        };
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "returndesk",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(view_name, Style::default().fg(Color::White)),
            Span::styled(
                format!(" ({})", self.state.role.as_str()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);

        let summary = Summary::from_requests(self.state.store.requests());
        frame.render_widget(
            Paragraph::new(Span::styled(
                summary_line(&summary),
                Style::default().fg(Color::Gray),
            )),
            summary_area,
        );
    }

    /// Renders the triage board with one bucket per return type.
    fn render_board_area(&self, frame: &mut Frame, area: Rect) {
        let buckets = self.state.store.buckets();
        render_board(
            &buckets,
            &self.state.buckets,
            self.state.selected_bucket,
            self.state.selected_card,
            area,
            frame.buffer_mut(),
        );
    }

    /// Renders the client table.
    fn render_client_area(&self, frame: &mut Frame, area: Rect) {
        let rows = client_rows(self.state.store.requests());
        render_client_table(&rows, self.state.selected_row, area, frame.buffer_mut());
    }
}
