use crate::engine::{format_value, Calculator, Input};
use ratatui::layout::Rect;

/// One cell of the on-screen pad, with the screen area it was last
/// rendered into. The rects are rebuilt on every draw, so hit tests
/// always match the current layout.
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub input: Input,
}

pub struct App {
    pub calc: Calculator,
    pub tape: Vec<String>,
    pub tape_scroll: usize,
    pub scroll_to_bottom: bool,
    pub buttons: Vec<Button>,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub list_height: usize,
    pub terminal_too_small: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            calc: Calculator::new(),
            tape: Vec::new(),
            tape_scroll: 0,
            scroll_to_bottom: false,
            buttons: Vec::new(),
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            list_height: 5,
            terminal_too_small: false,
        }
    }

    /// Feeds one input to the evaluator. When the transition folds a
    /// pending operation, the completed calculation lands on the tape.
    pub fn apply(&mut self, input: Input) {
        let before = self.calc.clone();
        self.calc = before.clone().step(input);

        if let Some(line) = fold_line(&before, &self.calc, input) {
            self.tape.push(line);
            self.scroll_to_bottom = true;
        }
    }

    pub fn clear_tape(&mut self) {
        self.tape.clear();
        self.tape_scroll = 0;
        self.scroll_to_bottom = false;
    }

    /// The pad input under a screen position, if any.
    pub fn button_at(&self, column: u16, row: u16) -> Option<Input> {
        self.buttons
            .iter()
            .find(|b| {
                column >= b.rect.x
                    && column < b.rect.x + b.rect.width
                    && row >= b.rect.y
                    && row < b.rect.y + b.rect.height
            })
            .map(|b| b.input)
    }
}

/// Tape line for a transition that applied the pending operation,
/// e.g. `7 + 3 = 10`. Both evaluate and operator-press folds qualify.
fn fold_line(before: &Calculator, after: &Calculator, input: Input) -> Option<String> {
    if !matches!(input, Input::Evaluate | Input::Operator(_)) || before.waiting_for_operand {
        return None;
    }
    let prev = before.previous_value?;
    let op = before.operation?;

    Some(format!(
        "{} {} {} = {}",
        format_value(prev),
        op.symbol(),
        before.display,
        after.display
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Operator;

    fn feed(app: &mut App, inputs: &[Input]) {
        for &input in inputs {
            app.apply(input);
        }
    }

    #[test]
    fn evaluate_writes_tape_line() {
        let mut app = App::new();
        feed(
            &mut app,
            &[
                Input::Digit(7),
                Input::Operator(Operator::Add),
                Input::Digit(3),
                Input::Evaluate,
            ],
        );
        assert_eq!(app.tape, vec!["7 + 3 = 10".to_string()]);
        assert!(app.scroll_to_bottom);
    }

    #[test]
    fn operator_fold_also_writes_tape_line() {
        let mut app = App::new();
        feed(
            &mut app,
            &[
                Input::Digit(2),
                Input::Operator(Operator::Add),
                Input::Digit(3),
                Input::Operator(Operator::Multiply),
            ],
        );
        assert_eq!(app.tape, vec!["2 + 3 = 5".to_string()]);
        assert_eq!(app.calc.display, "5");
    }

    #[test]
    fn repeated_operator_leaves_tape_alone() {
        let mut app = App::new();
        feed(
            &mut app,
            &[
                Input::Digit(6),
                Input::Operator(Operator::Add),
                Input::Operator(Operator::Add),
            ],
        );
        assert!(app.tape.is_empty());
    }

    #[test]
    fn clear_does_not_touch_tape() {
        let mut app = App::new();
        feed(
            &mut app,
            &[
                Input::Digit(8),
                Input::Operator(Operator::Divide),
                Input::Digit(2),
                Input::Evaluate,
                Input::Clear,
            ],
        );
        assert_eq!(app.calc.display, "0");
        assert_eq!(app.tape.len(), 1);

        app.clear_tape();
        assert!(app.tape.is_empty());
    }

    #[test]
    fn button_hit_test() {
        let mut app = App::new();
        app.buttons.push(Button {
            rect: Rect::new(4, 2, 8, 3),
            label: "7",
            input: Input::Digit(7),
        });

        assert_eq!(app.button_at(4, 2), Some(Input::Digit(7)));
        assert_eq!(app.button_at(11, 4), Some(Input::Digit(7)));
        assert_eq!(app.button_at(12, 2), None);
        assert_eq!(app.button_at(3, 5), None);
    }
}
