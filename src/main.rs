mod engine;
#[cfg(all(feature = "line", not(feature = "tui")))]
mod line_mode;
#[cfg(feature = "tui")]
mod render_help;
#[cfg(feature = "tui")]
mod tui_mode;

#[cfg(feature = "tui")]
fn main() -> anyhow::Result<()> {
    tui_mode::run_tui()
}

#[cfg(all(feature = "line", not(feature = "tui")))]
fn main() {
    line_mode::run_line();
}

#[cfg(not(any(feature = "tui", feature = "line")))]
fn main() {
    eprintln!("padcalc was built without a front end; enable the `tui` or `line` feature");
}
