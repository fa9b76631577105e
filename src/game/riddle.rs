//! A single riddle and its answer code

/// Solved state of a riddle. `Unsolved -> Solved` is the only transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiddleState {
    #[default]
    Unsolved,
    Solved,
}

/// One puzzle unit requiring a fixed-length digit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Riddle {
    code: String,
    state: RiddleState,
    /// Short label shown on the riddle card
    pub title: Option<String>,
    /// Riddle text
    pub prompt: Option<String>,
    /// Text revealed by the hint action
    pub hint: Option<String>,
}

impl Riddle {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            state: RiddleState::Unsolved,
            title: None,
            prompt: None,
            hint: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Title for display, falling back to "Riddle N" (1-based)
    pub fn label(&self, index: usize) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Riddle {}", index + 1))
    }

    /// Number of digit boxes this riddle needs
    pub fn code_len(&self) -> usize {
        self.code.len()
    }

    pub fn state(&self) -> RiddleState {
        self.state
    }

    pub fn is_solved(&self) -> bool {
        self.state == RiddleState::Solved
    }

    /// Whether `attempt` has the shape of this riddle's code: exactly
    /// `code_len` ASCII digits.
    pub fn accepts_shape(&self, attempt: &str) -> bool {
        attempt.len() == self.code.len() && attempt.bytes().all(|b| b.is_ascii_digit())
    }

    /// Byte-for-byte comparison against the expected code
    pub(crate) fn matches(&self, attempt: &str) -> bool {
        attempt.as_bytes() == self.code.as_bytes()
    }

    pub(crate) fn mark_solved(&mut self) {
        self.state = RiddleState::Solved;
    }
}
