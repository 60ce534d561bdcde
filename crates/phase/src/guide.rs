//! Browsing state for a phase-by-phase guide.
//!
//! A carousel over the eight phases in cycle order. Each phase keeps at most
//! one expanded question, remembered while the reader moves between phases.

use std::collections::BTreeMap;

use crate::category::PhaseCategory;
use crate::error::PhaseError;

/// Reducer state for browsing the eight phases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseGuide {
    current_index: usize,
    open_faq_by_phase: BTreeMap<PhaseCategory, usize>,
}

impl PhaseGuide {
    /// Creates a guide positioned on the new moon with every question closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of the displayed phase (0..8).
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the displayed phase.
    pub fn current(&self) -> PhaseCategory {
        // current_index is kept in range by every transition
        PhaseCategory::ALL[self.current_index % PhaseCategory::ALL.len()]
    }

    /// Advances to the next phase, wrapping from the last back to the first.
    pub fn next(&mut self) -> PhaseCategory {
        self.current_index = (self.current_index + 1) % PhaseCategory::ALL.len();
        self.current()
    }

    /// Steps back to the previous phase, wrapping from the first to the last.
    pub fn previous(&mut self) -> PhaseCategory {
        let n = PhaseCategory::ALL.len();
        self.current_index = (self.current_index + n - 1) % n;
        self.current()
    }

    /// Jumps directly to the phase at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseError::InvalidPhaseIndex`] if `index >= 8`; the
    /// position is left unchanged.
    pub fn select(&mut self, index: usize) -> Result<PhaseCategory, PhaseError> {
        let phase = PhaseCategory::from_index(index)?;
        self.current_index = index;
        Ok(phase)
    }

    /// Toggles question `question` of the displayed phase.
    ///
    /// Opening a question closes any other open question of the same phase.
    /// Returns the question now open for this phase, if any.
    pub fn toggle_faq(&mut self, question: usize) -> Option<usize> {
        let phase = self.current();
        if self.open_faq_by_phase.get(&phase) == Some(&question) {
            self.open_faq_by_phase.remove(&phase);
            None
        } else {
            self.open_faq_by_phase.insert(phase, question);
            Some(question)
        }
    }

    /// Returns the open question for `phase`, if any.
    pub fn open_faq(&self, phase: PhaseCategory) -> Option<usize> {
        self.open_faq_by_phase.get(&phase).copied()
    }

    /// Returns `true` if `question` is expanded on the displayed phase.
    pub fn is_open(&self, question: usize) -> bool {
        self.open_faq(self.current()) == Some(question)
    }
}
