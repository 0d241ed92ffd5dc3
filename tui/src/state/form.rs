use crossterm::event::KeyCode;
use model::{Artifact, PredictError, SessionMetrics};

/// Index of the Predict button in the focus order, after the five fields.
pub const BUTTON_ROW: usize = 5;

pub enum Action {
    None,
    Quit,
}

/// A constrained dropdown over a fixed list of integer values.
///
/// The list is the whole domain the trained estimator saw for the field, so
/// range enforcement lives here and nowhere else.
#[derive(Debug)]
pub struct Selector {
    values: Vec<i64>,
    selected: usize,
}

impl Selector {
    fn new(values: Vec<i64>) -> Self {
        debug_assert!(!values.is_empty());
        Self {
            values,
            selected: 0,
        }
    }

    pub fn value(&self) -> i64 {
        self.values[self.selected]
    }

    fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn next(&mut self) {
        if self.selected + 1 < self.values.len() {
            self.selected += 1;
        }
    }
}

/// Free-form numeric input; the buffer only ever holds a valid f32 prefix.
#[derive(Debug, Default)]
pub struct NumberInput {
    buffer: String,
}

impl NumberInput {
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Empty or partial input reads as zero, like an untouched form field.
    pub fn value(&self) -> f32 {
        self.buffer.parse().unwrap_or(0.0)
    }

    fn push(&mut self, c: char) {
        let ok = match c {
            '0'..='9' => true,
            '.' => !self.buffer.contains('.'),
            '-' => self.buffer.is_empty(),
            _ => false,
        };
        if ok {
            self.buffer.push(c);
        }
    }

    fn pop(&mut self) {
        self.buffer.pop();
    }
}

/// The whole dashboard state: one artifact, five widgets, one button.
pub struct FormState {
    artifact: Artifact,
    pub lines_of_code: Selector,
    pub ai_usage_hours: Selector,
    pub cognitive_load: Selector,
    pub task_duration_hours: NumberInput,
    pub errors: NumberInput,
    pub focus: usize,
    pub prediction: Option<f32>,
}

impl FormState {
    pub fn new(artifact: Artifact) -> Self {
        Self {
            artifact,
            lines_of_code: Selector::new((50..2000).step_by(50).collect()),
            ai_usage_hours: Selector::new((1..24).collect()),
            cognitive_load: Selector::new((20..100).collect()),
            task_duration_hours: NumberInput::default(),
            errors: NumberInput::default(),
            focus: 0,
            prediction: None,
        }
    }

    /// The record currently selected in the sidebar.
    pub fn metrics(&self) -> SessionMetrics {
        SessionMetrics {
            lines_of_code: self.lines_of_code.value(),
            ai_usage_hours: self.ai_usage_hours.value(),
            cognitive_load: self.cognitive_load.value(),
            task_duration_hours: self.task_duration_hours.value(),
            errors: self.errors.value(),
        }
    }

    /// Human form of the artifact's target name, for the success banner.
    pub fn target_label(&self) -> String {
        self.artifact.target().replace('_', " ")
    }

    fn predict(&mut self) -> Result<(), PredictError> {
        let scores = self.artifact.predict(&self.metrics().to_frame())?;
        self.prediction = Some(scores[0]);
        Ok(())
    }

    fn focus_prev(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    fn focus_next(&mut self) {
        if self.focus < BUTTON_ROW {
            self.focus += 1;
        }
    }

    fn cycle_left(&mut self) {
        match self.focus {
            0 => self.lines_of_code.prev(),
            1 => self.ai_usage_hours.prev(),
            2 => self.cognitive_load.prev(),
            _ => {}
        }
    }

    fn cycle_right(&mut self) {
        match self.focus {
            0 => self.lines_of_code.next(),
            1 => self.ai_usage_hours.next(),
            2 => self.cognitive_load.next(),
            _ => {}
        }
    }

    fn active_input_mut(&mut self) -> Option<&mut NumberInput> {
        match self.focus {
            3 => Some(&mut self.task_duration_hours),
            4 => Some(&mut self.errors),
            _ => None,
        }
    }

    fn is_typing(&self) -> bool {
        matches!(self.focus, 3 | 4)
    }
}

/// Applies one key press to the form.
///
/// Any key that changes an input value drops the previous prediction, so
/// the success banner never describes stale inputs. Moving focus alone
/// keeps it.
///
/// # Errors
/// Returns the artifact's error if a prediction fails; the event loop
/// treats that as fatal.
pub fn handle_key(state: &mut FormState, key: KeyCode) -> Result<Action, PredictError> {
    let before = state.metrics();
    let typing = state.is_typing();

    match key {
        KeyCode::Esc => return Ok(Action::Quit),
        KeyCode::Char('q') if !typing => return Ok(Action::Quit),
        KeyCode::Up => state.focus_prev(),
        KeyCode::Char('k') if !typing => state.focus_prev(),
        KeyCode::Down => state.focus_next(),
        KeyCode::Char('j') if !typing => state.focus_next(),
        KeyCode::Left => state.cycle_left(),
        KeyCode::Char('h') if !typing => state.cycle_left(),
        KeyCode::Right => state.cycle_right(),
        KeyCode::Char('l') if !typing => state.cycle_right(),
        KeyCode::Backspace => {
            if let Some(input) = state.active_input_mut() {
                input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = state.active_input_mut() {
                input.push(c);
            }
        }
        KeyCode::Enter => {
            if state.focus == BUTTON_ROW {
                state.predict()?;
            } else {
                state.focus_next();
            }
        }
        _ => {}
    }

    if state.metrics() != before {
        state.prediction = None;
    }

    Ok(Action::None)
}
