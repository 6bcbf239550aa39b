use crate::tui_mode::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_help(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" PadCalc Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        ))
    };

    let help_text = vec![
        Line::from(Span::styled(
            "PadCalc - Terminal Pad Calculator",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section("Entering Numbers:"),
        Line::from("  0-9 : Type digits (or click the pad)"),
        Line::from("  .   : Decimal point (only one per number)"),
        Line::from(""),
        section("Operations:"),
        Line::from("  + : Addition        (e.g., 5 + 3 = 8)"),
        Line::from("  - : Subtraction     (e.g., 10 - 4 = 6)"),
        Line::from("  * : Multiplication  (e.g., 6 * 7 = 42)"),
        Line::from("  / : Division        (e.g., 15 / 3 = 5)"),
        Line::from(""),
        Line::from("  Operations chain left to right: 2 + 3 * 4 = 20."),
        Line::from("  Pressing a second operator in a row just replaces"),
        Line::from("  the pending one; nothing is evaluated twice."),
        Line::from("  Division by zero shows 0."),
        Line::from(""),
        section("Evaluate and Clear:"),
        Line::from("  Enter or = : Apply the pending operation"),
        Line::from("  Esc, c, C  : Clear the display and pending state"),
        Line::from("  Delete     : Clear the tape"),
        Line::from(""),
        section("Mouse:"),
        Line::from("  Click any pad button to press it"),
        Line::from("  Mouse wheel scrolls the tape (or this help)"),
        Line::from(""),
        section("Other Keys:"),
        Line::from("  Up/Down, PgUp/PgDn : Scroll the tape"),
        Line::from("  F1 : Show this help screen"),
        Line::from("  q  : Quit"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
