//! Short-lived success/failure tint after a submission

use ratatui::style::Color;

use super::{FLASH_FAILURE_BG, FLASH_SUCCESS_BG};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Failure,
}

impl FlashKind {
    pub fn background(self) -> Color {
        match self {
            FlashKind::Success => FLASH_SUCCESS_BG,
            FlashKind::Failure => FLASH_FAILURE_BG,
        }
    }
}

/// Current flash, the riddle it belongs to, and a generation counter.
///
/// Each trigger bumps the generation; an expiry only clears the flash it was
/// scheduled for, so a late timer never cuts a newer flash short.
#[derive(Debug, Clone, Default)]
pub struct FlashState {
    kind: Option<FlashKind>,
    riddle: usize,
    generation: u64,
}

impl FlashState {
    /// Flash the card of the riddle that was just evaluated
    pub fn trigger(&mut self, kind: FlashKind, riddle: usize) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.kind = Some(kind);
        self.riddle = riddle;
        self.generation
    }

    pub fn kind(&self) -> Option<FlashKind> {
        self.kind
    }

    /// Riddle the active flash belongs to
    pub fn riddle(&self) -> Option<usize> {
        self.kind.map(|_| self.riddle)
    }

    /// Tint for the card at `index`, if it is the one flashing
    pub fn tint_for(&self, index: usize) -> Option<FlashKind> {
        self.kind.filter(|_| self.riddle == index)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.kind.is_none() {
            return false;
        }
        self.kind = None;
        true
    }
}
