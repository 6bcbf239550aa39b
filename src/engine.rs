//! Pad-style calculator state machine.
//!
//! The whole evaluator is one small state record driven by five total
//! transitions. Transitions consume the state and return the next one,
//! so the evaluator is testable without any terminal attached.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Division by zero yields 0 by policy, never an error or infinity.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => {
                if b != 0.0 {
                    a / b
                } else {
                    0.0
                }
            }
        }
    }
}

/// Input vocabulary shared by every front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Evaluate,
    Clear,
}

/// The state record.
///
/// `display` is always a valid numeric literal with at most one decimal
/// point. `waiting_for_operand` means the next digit starts a fresh
/// number instead of appending.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    pub display: String,
    pub previous_value: Option<f64>,
    pub operation: Option<Operator>,
    pub waiting_for_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Calculator::default()
    }

    /// Runs one transition and returns the next state.
    pub fn step(self, input: Input) -> Self {
        match input {
            Input::Digit(d) => self.input_digit(d),
            Input::Decimal => self.input_decimal(),
            Input::Operator(op) => self.input_operator(op),
            Input::Evaluate => self.evaluate(),
            Input::Clear => Calculator::new(),
        }
    }

    /// Value currently on the display.
    pub fn current_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    fn input_digit(mut self, d: u8) -> Self {
        let d = (d % 10).to_string();
        if self.waiting_for_operand {
            self.display = d;
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = d;
        } else {
            self.display.push_str(&d);
        }
        self
    }

    fn input_decimal(mut self) -> Self {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self
    }

    fn input_operator(mut self, op: Operator) -> Self {
        let input_value = self.current_value();

        match (self.previous_value, self.operation) {
            (None, _) => {
                self.previous_value = Some(input_value);
            }
            // A second operator right after the first only retargets the
            // pending operation; folding happens once a digit intervened.
            (Some(prev), Some(pending)) if !self.waiting_for_operand => {
                let result = pending.apply(prev, input_value);
                self.display = format_value(result);
                self.previous_value = Some(result);
            }
            _ => {}
        }

        self.operation = Some(op);
        self.waiting_for_operand = true;
        self
    }

    fn evaluate(mut self) -> Self {
        if let (Some(prev), Some(op)) = (self.previous_value, self.operation) {
            if !self.waiting_for_operand {
                let result = op.apply(prev, self.current_value());
                self.display = format_value(result);
                self.previous_value = None;
                self.operation = None;
                self.waiting_for_operand = true;
            }
        }
        self
    }
}

/// Canonical decimal text of a value, no rounding or locale formatting.
pub fn format_value(x: f64) -> String {
    x.to_string()
}

/// Maps a typed character onto the shared input vocabulary.
///
/// Both front ends feed the evaluator through this table; characters
/// outside the vocabulary map to `None` and are dropped by the caller.
pub fn input_for_char(c: char) -> Option<Input> {
    match c {
        '0'..='9' => Some(Input::Digit(c as u8 - b'0')),
        '.' => Some(Input::Decimal),
        '=' => Some(Input::Evaluate),
        'c' | 'C' => Some(Input::Clear),
        _ => Operator::from_char(c).map(Input::Operator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(inputs: &[Input]) -> Calculator {
        inputs
            .iter()
            .fold(Calculator::new(), |calc, &input| calc.step(input))
    }

    use Input::*;
    use Operator::*;

    use super::Operator;

    #[test]
    fn digits_concatenate() {
        let calc = run(&[Digit(1), Digit(2), Digit(3)]);
        assert_eq!(calc.display, "123");
    }

    #[test]
    fn leading_zero_is_replaced() {
        let calc = run(&[Digit(0), Digit(0), Digit(7)]);
        assert_eq!(calc.display, "7");
    }

    #[test]
    fn decimal_point_is_idempotent() {
        let calc = run(&[Digit(5), Decimal, Decimal]);
        assert_eq!(calc.display, "5.");
    }

    #[test]
    fn decimal_first_starts_zero_point() {
        let calc = run(&[Decimal, Digit(5)]);
        assert_eq!(calc.display, "0.5");
    }

    #[test]
    fn decimal_after_operator_starts_fresh() {
        let calc = run(&[Digit(4), Operator(Add), Decimal]);
        assert_eq!(calc.display, "0.");
        assert!(!calc.waiting_for_operand);
    }

    #[test]
    fn basic_addition() {
        let calc = run(&[Digit(7), Operator(Add), Digit(3), Evaluate]);
        assert_eq!(calc.display, "10");
        assert_eq!(calc.previous_value, None);
        assert_eq!(calc.operation, None);
    }

    #[test]
    fn basic_division() {
        let calc = run(&[Digit(8), Operator(Divide), Digit(2), Evaluate]);
        assert_eq!(calc.display, "4");
    }

    #[test]
    fn division_by_zero_yields_zero() {
        let calc = run(&[Digit(5), Operator(Divide), Digit(0), Evaluate]);
        assert_eq!(calc.display, "0");
    }

    #[test]
    fn repeated_operator_does_not_evaluate() {
        let calc = run(&[
            Digit(6),
            Operator(Add),
            Operator(Add),
            Digit(3),
            Evaluate,
        ]);
        assert_eq!(calc.display, "9");
    }

    #[test]
    fn repeated_operator_retargets_operation() {
        let calc = run(&[Digit(6), Operator(Add), Operator(Multiply), Digit(3), Evaluate]);
        assert_eq!(calc.display, "18");
    }

    #[test]
    fn chained_operators_fold_left_to_right() {
        let calc = run(&[
            Digit(2),
            Operator(Add),
            Digit(3),
            Operator(Multiply),
            Digit(4),
            Evaluate,
        ]);
        // (2 + 3) * 4, no precedence on a pad calculator
        assert_eq!(calc.display, "20");
    }

    #[test]
    fn digit_after_operator_replaces_display() {
        let calc = run(&[Digit(5), Operator(Add), Digit(3)]);
        assert_eq!(calc.display, "3");
    }

    #[test]
    fn digit_after_evaluate_starts_fresh() {
        let calc = run(&[Digit(7), Operator(Add), Digit(3), Evaluate, Digit(2)]);
        assert_eq!(calc.display, "2");
        assert_eq!(calc.previous_value, None);
    }

    #[test]
    fn evaluate_without_operator_is_noop() {
        let calc = run(&[Digit(4), Digit(2), Evaluate]);
        assert_eq!(calc.display, "42");
        assert!(!calc.waiting_for_operand);
    }

    #[test]
    fn repeated_evaluate_does_not_repeat_operation() {
        let calc = run(&[Digit(7), Operator(Add), Digit(3), Evaluate, Evaluate]);
        assert_eq!(calc.display, "10");
    }

    #[test]
    fn clear_resets_everything() {
        let calc = run(&[Digit(1), Operator(Divide), Digit(3), Clear]);
        assert_eq!(calc, Calculator::new());
        assert_eq!(calc.display, "0");
    }

    #[test]
    fn fractional_result_is_unrounded() {
        let calc = run(&[
            Decimal,
            Digit(1),
            Operator(Add),
            Decimal,
            Digit(2),
            Evaluate,
        ]);
        assert_eq!(calc.display, "0.30000000000000004");
    }

    #[test]
    fn subtraction_below_zero() {
        let calc = run(&[Digit(3), Operator(Subtract), Digit(5), Evaluate]);
        assert_eq!(calc.display, "-2");
    }

    #[test]
    fn char_mapping_covers_vocabulary() {
        assert_eq!(input_for_char('7'), Some(Digit(7)));
        assert_eq!(input_for_char('0'), Some(Digit(0)));
        assert_eq!(input_for_char('.'), Some(Decimal));
        assert_eq!(input_for_char('+'), Some(Operator(Add)));
        assert_eq!(input_for_char('/'), Some(Operator(Divide)));
        assert_eq!(input_for_char('='), Some(Evaluate));
        assert_eq!(input_for_char('c'), Some(Clear));
        assert_eq!(input_for_char('C'), Some(Clear));
    }

    #[test]
    fn unmapped_chars_are_ignored() {
        for c in ['x', ' ', '(', '%', '^', 'e'] {
            assert_eq!(input_for_char(c), None);
        }
    }

    #[test]
    fn operator_roundtrip_symbols() {
        for c in ['+', '-', '*', '/'] {
            let op = Operator::from_char(c).unwrap();
            assert_eq!(op.symbol(), c);
        }
        assert_eq!(Operator::from_char('%'), None);
    }
}
