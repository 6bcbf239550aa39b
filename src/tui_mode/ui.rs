use super::app::{App, Button};
use super::helpers::fit_display;
use crate::engine::{input_for_char, Input, Operator};
use crate::render_help::render_help;
use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::time::Duration;

const MIN_TERMINAL_WIDTH: u16 = 36;
const MIN_TERMINAL_HEIGHT: u16 = 22;

const BUTTON_WIDTH: u16 = 8;
const BUTTON_HEIGHT: u16 = 3;
const PAD_COLS: u16 = 4;
const PAD_ROWS: u16 = 5;

pub fn run_ui_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            if app.show_help {
                render_help(f, app);
            } else {
                ui(f, app);
            }
        })?;

        if app.should_quit {
            break;
        }

        if crossterm::event::poll(Duration::from_millis(50))? {
            match crossterm::event::read()? {
                Event::Key(KeyEvent { code, modifiers, kind, .. }) if kind == KeyEventKind::Press => {
                    handle_key_event(app, code, modifiers);
                }
                Event::Mouse(event) => {
                    handle_mouse_event(app, event);
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if app.show_help {
        match code {
            KeyCode::Down => app.help_scroll = app.help_scroll.saturating_add(1),
            KeyCode::Up => app.help_scroll = app.help_scroll.saturating_sub(1),
            KeyCode::PageDown => app.help_scroll = app.help_scroll.saturating_add(10),
            KeyCode::PageUp => app.help_scroll = app.help_scroll.saturating_sub(10),
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => {
                app.show_help = false;
                app.help_scroll = 0;
            }
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Char('q') if modifiers.is_empty() => app.should_quit = true,
        // SHIFT stays allowed: '*' arrives shifted on most layouts
        KeyCode::Char(c) if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT => {
            if let Some(input) = input_for_char(c) {
                app.apply(input);
            }
        }
        KeyCode::Enter => app.apply(Input::Evaluate),
        KeyCode::Esc => app.apply(Input::Clear),
        KeyCode::Delete => app.clear_tape(),
        KeyCode::Up => app.tape_scroll = app.tape_scroll.saturating_sub(1),
        KeyCode::Down => app.tape_scroll = app.tape_scroll.saturating_add(1),
        KeyCode::PageUp => {
            app.tape_scroll = app.tape_scroll.saturating_sub(app.list_height.max(1))
        }
        KeyCode::PageDown => {
            app.tape_scroll = app.tape_scroll.saturating_add(app.list_height.max(1))
        }
        KeyCode::F(1) => {
            app.show_help = true;
            app.help_scroll = 0;
        }
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, event: crossterm::event::MouseEvent) {
    if app.show_help {
        match event.kind {
            MouseEventKind::ScrollDown => app.help_scroll = app.help_scroll.saturating_add(3),
            MouseEventKind::ScrollUp => app.help_scroll = app.help_scroll.saturating_sub(3),
            _ => {}
        }
        return;
    }

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(input) = app.button_at(event.column, event.row) {
                app.apply(input);
            }
        }
        MouseEventKind::ScrollDown => app.tape_scroll = app.tape_scroll.saturating_add(3),
        MouseEventKind::ScrollUp => app.tape_scroll = app.tape_scroll.saturating_sub(3),
        _ => {}
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let terminal_size = frame.size();

    app.terminal_too_small = terminal_size.width < MIN_TERMINAL_WIDTH
        || terminal_size.height < MIN_TERMINAL_HEIGHT;

    if app.terminal_too_small {
        render_resize_message(frame, terminal_size);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(PAD_ROWS * BUTTON_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(terminal_size);

    render_display(frame, app, layout[0]);
    render_keypad(frame, app, layout[1]);
    render_tape(frame, app, layout[2]);
    render_status(frame, layout[3]);
}

fn render_resize_message(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small! Min size: {}x{}. Current: {}x{}",
        MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT, area.width, area.height
    );

    let text = vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal window",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Resize Required ")
        .title_alignment(Alignment::Center);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_display(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Display ")
        .title_alignment(Alignment::Center);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // one cell on the left is reserved for the pending-operator marker
    let value_width = inner_area.width.saturating_sub(2) as usize;
    let value = fit_display(&app.calc.display, value_width);

    let paragraph = Paragraph::new(value)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, inner_area);

    if let Some(op) = app.calc.operation {
        let marker = Paragraph::new(op.symbol().to_string())
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(marker, Rect::new(inner_area.x, inner_area.y, 1, 1));
    }
}

fn render_keypad(frame: &mut Frame, app: &mut App, area: Rect) {
    let pad_width = (PAD_COLS * BUTTON_WIDTH).min(area.width);
    let pad_area = Rect::new(
        area.x + (area.width - pad_width) / 2,
        area.y,
        pad_width,
        area.height,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(BUTTON_HEIGHT); PAD_ROWS as usize])
        .split(pad_area);

    let mut cells: Vec<Vec<Rect>> = Vec::new();
    for row in rows.iter() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(BUTTON_WIDTH); PAD_COLS as usize])
            .split(*row);
        cells.push(columns.to_vec());
    }

    // Clear and 0 span two cells, = spans the two bottom rows
    // of the last column
    let buttons = vec![
        Button { rect: cells[0][0].union(cells[0][1]), label: "Clear", input: Input::Clear },
        Button { rect: cells[0][2], label: "÷", input: Input::Operator(Operator::Divide) },
        Button { rect: cells[0][3], label: "×", input: Input::Operator(Operator::Multiply) },
        Button { rect: cells[1][0], label: "7", input: Input::Digit(7) },
        Button { rect: cells[1][1], label: "8", input: Input::Digit(8) },
        Button { rect: cells[1][2], label: "9", input: Input::Digit(9) },
        Button { rect: cells[1][3], label: "−", input: Input::Operator(Operator::Subtract) },
        Button { rect: cells[2][0], label: "4", input: Input::Digit(4) },
        Button { rect: cells[2][1], label: "5", input: Input::Digit(5) },
        Button { rect: cells[2][2], label: "6", input: Input::Digit(6) },
        Button { rect: cells[2][3], label: "+", input: Input::Operator(Operator::Add) },
        Button { rect: cells[3][0], label: "1", input: Input::Digit(1) },
        Button { rect: cells[3][1], label: "2", input: Input::Digit(2) },
        Button { rect: cells[3][2], label: "3", input: Input::Digit(3) },
        Button { rect: cells[3][3].union(cells[4][3]), label: "=", input: Input::Evaluate },
        Button { rect: cells[4][0].union(cells[4][1]), label: "0", input: Input::Digit(0) },
        Button { rect: cells[4][2], label: ".", input: Input::Decimal },
    ];

    for button in &buttons {
        render_button(frame, button);
    }

    app.buttons = buttons;
}

fn render_button(frame: &mut Frame, button: &Button) {
    let style = match button.input {
        Input::Clear => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Input::Operator(_) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Input::Evaluate => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::Gray),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(button.rect);
    frame.render_widget(block, button.rect);

    // vertically center the label inside the spanned area
    let label_y = inner.y + inner.height / 2;
    let label_area = Rect::new(inner.x, label_y, inner.width, 1);
    let label = Paragraph::new(button.label)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(label, label_area);
}

fn render_tape(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Tape ")
        .title_alignment(Alignment::Center);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    app.list_height = inner_area.height as usize;

    if app.tape.is_empty() {
        let empty_msg = Paragraph::new("No calculations yet.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty_msg, inner_area);
        return;
    }

    let items: Vec<ListItem> = app
        .tape
        .iter()
        .map(|line| {
            ListItem::new(Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Green)),
                Span::styled(line.clone(), Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let max_scroll = items.len().saturating_sub(inner_area.height as usize);
    if app.scroll_to_bottom {
        app.tape_scroll = max_scroll;
        app.scroll_to_bottom = false;
    }
    app.tape_scroll = app.tape_scroll.min(max_scroll);

    let list = List::new(items).block(Block::default());
    let mut state = ListState::default().with_offset(app.tape_scroll);
    frame.render_stateful_widget(list, inner_area, &mut state);
}

fn render_status(frame: &mut Frame, area: Rect) {
    let keys = [
        ("0-9 . + - * /", "Type"),
        ("Enter/=", "Evaluate"),
        ("Esc/C", "Clear"),
        ("Del", "Clear Tape"),
        ("F1", "Help"),
        ("q", "Quit"),
    ];

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(
                    *key,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {} ", desc),
                    Style::default().fg(Color::DarkGray),
                ),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
