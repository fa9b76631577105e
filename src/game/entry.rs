//! Digit entry for one riddle: a row of single-digit boxes with a focus
//! cursor. This is the input collector that turns key presses and pastes
//! into an attempt string.

/// Row of single-digit boxes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitEntry {
    boxes: Vec<Option<char>>,
    focus: usize,
    disabled: bool,
}

impl DigitEntry {
    pub fn new(len: usize) -> Self {
        Self {
            boxes: vec![None; len],
            focus: 0,
            disabled: false,
        }
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.iter().all(Option::is_none)
    }

    /// Every box holds a digit
    pub fn is_filled(&self) -> bool {
        self.boxes.iter().all(Option::is_some)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn boxes(&self) -> &[Option<char>] {
        &self.boxes
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Lock the row after its riddle is solved
    pub fn disable(&mut self) {
        self.disabled = true;
    }

    /// Concatenated box values; empty boxes contribute nothing
    pub fn code(&self) -> String {
        self.boxes.iter().flatten().collect()
    }

    /// Type a character into the focused box. Non-digits are dropped.
    /// After a digit, focus moves to the next box unless already on the last.
    /// Returns whether the row changed.
    pub fn input_char(&mut self, c: char) -> bool {
        if self.disabled || !c.is_ascii_digit() || self.boxes.is_empty() {
            return false;
        }
        self.boxes[self.focus] = Some(c);
        if self.focus + 1 < self.boxes.len() {
            self.focus += 1;
        }
        true
    }

    /// Clear the focused box, or step back when it is already empty
    pub fn backspace(&mut self) {
        if self.disabled || self.boxes.is_empty() {
            return;
        }
        if self.boxes[self.focus].is_some() {
            self.boxes[self.focus] = None;
        } else if self.focus > 0 {
            self.focus -= 1;
        }
    }

    pub fn move_left(&mut self) {
        if !self.disabled && self.focus > 0 {
            self.focus -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if !self.disabled && self.focus + 1 < self.boxes.len() {
            self.focus += 1;
        }
    }

    /// Spread the digits of `text` over the boxes from the first one.
    ///
    /// Boxes past the pasted digits are cleared. Focus lands on the first
    /// empty box, or the last box when all are filled. Text without any digit
    /// leaves the row untouched.
    pub fn paste(&mut self, text: &str) -> bool {
        if self.disabled || self.boxes.is_empty() {
            return false;
        }
        let digits: Vec<char> = text.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return false;
        }

        for (i, slot) in self.boxes.iter_mut().enumerate() {
            *slot = digits.get(i).copied();
        }
        self.focus = self
            .boxes
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.boxes.len() - 1);
        true
    }

    /// Empty every box and focus the first one
    pub fn clear(&mut self) {
        if self.disabled {
            return;
        }
        self.boxes.iter_mut().for_each(|slot| *slot = None);
        self.focus = 0;
    }
}
