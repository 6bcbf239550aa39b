use crate::engine::{input_for_char, Calculator, Input};
use std::io::{stdin, stdout, Write};
use termion::{clear::CurrentLine as ClearLine, event::Key, input::TermRead, raw::IntoRawMode};

/// Minimal raw-terminal front end: every key press runs one evaluator
/// transition and the display line is redrawn.
pub fn run_line() {
    println!("PadCalc (line mode)");
    println!("Keys: 0-9 . + - * /, Enter or = to evaluate");
    println!("Esc/c/C clears, q quits\n");

    let mut stdout = stdout().into_raw_mode().unwrap();
    let mut calc = Calculator::new();

    draw(&mut stdout, &calc);

    for key in stdin().keys() {
        let input = match key.unwrap() {
            Key::Char('q') => break,
            Key::Char('\n') => Some(Input::Evaluate),
            Key::Esc => Some(Input::Clear),
            Key::Char(c) => input_for_char(c),
            _ => None,
        };

        if let Some(input) = input {
            calc = calc.step(input);
        }
        draw(&mut stdout, &calc);
    }

    println!("\r\nGoodbye!");
}

fn draw(stdout: &mut impl Write, calc: &Calculator) {
    let pending = match calc.operation {
        Some(op) => format!(" [{}]", op.symbol()),
        None => String::new(),
    };
    write!(stdout, "\r{}Display: {}{}", ClearLine, calc.display, pending).unwrap();
    stdout.flush().unwrap();
}
