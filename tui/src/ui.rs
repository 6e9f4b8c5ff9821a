//! Terminal UI: renders the todo list, the add form, and the error banner,
//! and wires key events to state transitions.
//!
//! Every user action runs its request to completion on the UI thread and
//! settles the outcome into `TodoState` before the next frame is drawn, so
//! state is only ever mutated after a request settles.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io;

use todo_core::{TodoClient, TodoState};

use crate::http;

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    TitleInput,
    DescriptionInput,
    TodoList,
}

pub struct App {
    client: TodoClient,
    agent: ureq::Agent,
    pub state: TodoState,
    pub list_state: ListState,
    focus: Focus,
    pub should_quit: bool,
}

impl App {
    /// Create the app and perform the one automatic load of the collection.
    pub fn new(api_url: &str) -> Self {
        let mut app = App {
            client: TodoClient::new(api_url),
            agent: http::agent(),
            state: TodoState::new(),
            list_state: ListState::default(),
            focus: Focus::TitleInput,
            should_quit: false,
        };
        app.load();
        app
    }

    fn load(&mut self) {
        let result = http::execute(&self.agent, self.client.build_list_todos())
            .and_then(|resp| self.client.parse_list_todos(resp));
        self.state.settle_load(result);
        self.clamp_selection();
    }

    /// Submit the draft form. Issues no request when the title is empty or
    /// whitespace-only.
    fn submit(&mut self) {
        let Some(input) = self.state.draft_create() else {
            return;
        };
        let result = self
            .client
            .build_create_todo(&input)
            .and_then(|req| http::execute(&self.agent, req))
            .and_then(|resp| self.client.parse_create_todo(resp));
        self.state.settle_create(result);
        self.clamp_selection();
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(target) = self.state.toggle_target(id) else {
            return;
        };
        let result = self
            .client
            .build_set_completed(id, target)
            .and_then(|req| http::execute(&self.agent, req))
            .and_then(|resp| self.client.parse_set_completed(resp));
        self.state.settle_toggle(id, target, result);
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let result = http::execute(&self.agent, self.client.build_delete_todo(id))
            .and_then(|resp| self.client.parse_delete_todo(resp));
        self.state.settle_delete(id, result);
        self.clamp_selection();
    }

    fn selected_id(&self) -> Option<u64> {
        let i = self.list_state.selected()?;
        self.state.todos.get(i).map(|t| t.id)
    }

    /// Keep the selection inside the collection after it changed size.
    fn clamp_selection(&mut self) {
        if self.state.todos.is_empty() {
            self.list_state.select(None);
        } else {
            let i = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(i.min(self.state.todos.len() - 1)));
        }
    }

    fn next_item(&mut self) {
        if self.state.todos.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= self.state.todos.len() - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_item(&mut self) {
        if self.state.todos.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.state.todos.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn next_focus(&mut self) {
        self.focus = match self.focus {
            Focus::TitleInput => Focus::DescriptionInput,
            Focus::DescriptionInput => Focus::TodoList,
            Focus::TodoList => Focus::TitleInput,
        };
    }

    fn previous_focus(&mut self) {
        self.focus = match self.focus {
            Focus::TitleInput => Focus::TodoList,
            Focus::DescriptionInput => Focus::TitleInput,
            Focus::TodoList => Focus::DescriptionInput,
        };
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.next_focus(),
            KeyCode::BackTab => self.previous_focus(),
            _ => match self.focus {
                Focus::TitleInput | Focus::DescriptionInput => self.handle_input_key(code),
                Focus::TodoList => self.handle_list_key(code),
            },
        }
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        if code == KeyCode::Enter {
            self.submit();
            return;
        }
        let buffer = match self.focus {
            Focus::TitleInput => &mut self.state.draft_title,
            _ => &mut self.state.draft_description,
        };
        match code {
            KeyCode::Char(c) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.next_item(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_item(),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('r') => self.load(),
            _ => {}
        }
    }
}

pub fn run_tui(api_url: &str) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(api_url);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    let header = Paragraph::new("Todo List")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(header, chunks[0]);

    render_error_banner(f, app, chunks[1]);
    render_input(f, app, chunks[2], Focus::TitleInput, "Todo title", &app.state.draft_title);
    render_input(
        f,
        app,
        chunks[3],
        Focus::DescriptionInput,
        "Description (optional)",
        &app.state.draft_description,
    );
    render_todos(f, app, chunks[4]);

    let help = Paragraph::new(
        "Tab: switch focus | Enter: add | Space: toggle | d: delete | r: refresh | Esc: quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[5]);
}

fn render_error_banner(f: &mut Frame, app: &App, area: Rect) {
    if let Some(error) = &app.state.error {
        let banner = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::White).bg(Color::Red));
        f.render_widget(banner, area);
    }
}

fn render_input(f: &mut Frame, app: &App, area: Rect, focus: Focus, title: &str, value: &str) {
    let border_style = if app.focus == focus {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let input = Paragraph::new(value)
        .block(Block::default().borders(Borders::ALL).title(title).border_style(border_style));
    f.render_widget(input, area);
}

fn render_todos(f: &mut Frame, app: &mut App, area: Rect) {
    let border_style = if app.focus == Focus::TodoList {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default().borders(Borders::ALL).title("Todos").border_style(border_style);

    if app.state.todos.is_empty() {
        let empty = Paragraph::new("No todos yet. Add one above!")
            .block(block)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .todos
        .iter()
        .map(|todo| {
            let checkbox = if todo.completed { "[x] " } else { "[ ] " };
            let title_style = if todo.completed {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };
            let mut lines = vec![Line::from(vec![
                Span::raw(checkbox),
                Span::styled(todo.title.clone(), title_style),
            ])];
            if let Some(description) = &todo.description {
                if !description.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("    {description}"),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Black).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}
