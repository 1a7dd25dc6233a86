//! Result selector operations over a [`ResultSelection`].

use tracing::debug;

use hcu_model::{ResultCategory, ResultMode, ResultSelection};

use crate::error::{Result, StateError};

/// `selected/total` per category, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultCounts {
    pub body: (usize, usize),
    pub rod: (usize, usize),
    pub payload: (usize, usize),
}

impl ResultCounts {
    pub fn get(&self, category: ResultCategory) -> (usize, usize) {
        match category {
            ResultCategory::Body => self.body,
            ResultCategory::Rod => self.rod,
            ResultCategory::Payload => self.payload,
        }
    }
}

/// Borrowing handle for editing the selection.
///
/// Mode changes keep the sets, so switching back to `Customized` restores
/// the last manual selection. Entering `Customized` with every set empty
/// starts from the defaults instead.
#[derive(Debug)]
pub struct ResultSelector<'a> {
    selection: &'a mut ResultSelection,
}

impl<'a> ResultSelector<'a> {
    pub fn new(selection: &'a mut ResultSelection) -> Self {
        Self { selection }
    }

    pub fn mode(&self) -> ResultMode {
        self.selection.mode
    }

    pub fn set_mode(&mut self, mode: ResultMode) {
        if self.selection.mode == mode {
            return;
        }
        debug!(?mode, "result mode changed");
        self.selection.mode = mode;
        if mode == ResultMode::Customized && self.selection.is_empty() {
            self.apply_defaults();
        }
    }

    /// Restore the default subset in every category.
    pub fn apply_defaults(&mut self) {
        for category in ResultCategory::ALL {
            self.selection.replace(category, category.defaults());
        }
        debug!("result defaults applied");
    }

    /// Select every option in every category.
    pub fn select_all(&mut self) {
        for category in ResultCategory::ALL {
            self.selection.replace(category, category.catalog());
        }
        debug!("all result channels selected");
    }

    /// Add or remove one option. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, category: ResultCategory, option: &str) -> Result<bool> {
        if !category.contains(option) {
            return Err(StateError::UnknownResultChannel {
                category,
                option: option.to_string(),
            });
        }
        let set = self.selection.set_mut(category);
        let selected = if set.remove(option) {
            false
        } else {
            set.insert(option.to_string());
            true
        };
        debug!(%category, option, selected, "result channel toggled");
        Ok(selected)
    }

    /// Set the membership of one option explicitly.
    pub fn set_selected(
        &mut self,
        category: ResultCategory,
        option: &str,
        selected: bool,
    ) -> Result<()> {
        if self.selection.contains(category, option) != selected {
            self.toggle(category, option)?;
        } else if !category.contains(option) {
            return Err(StateError::UnknownResultChannel {
                category,
                option: option.to_string(),
            });
        }
        Ok(())
    }

    pub fn counts(&self) -> ResultCounts {
        counts(self.selection)
    }
}

/// Derived `selected/total` counts of a selection.
pub fn counts(selection: &ResultSelection) -> ResultCounts {
    ResultCounts {
        body: selection.count(ResultCategory::Body),
        rod: selection.count(ResultCategory::Rod),
        payload: selection.count(ResultCategory::Payload),
    }
}
