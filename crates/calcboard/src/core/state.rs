//! Calculator state and its transitions

use super::number::{format_number, parse_decimal};
use super::{Operation, ERROR_SENTINEL};

/// The value being typed on the current display line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Digits with at most one decimal point; empty when nothing is entered
    Digits(String),
    /// The last computation had no numeric result
    Error,
}

impl Default for Entry {
    fn default() -> Self {
        Self::Digits(String::new())
    }
}

impl Entry {
    /// Returns the entry as text, the sentinel for [`Entry::Error`]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Digits(digits) => digits,
            Self::Error => ERROR_SENTINEL,
        }
    }

    /// Returns true when nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Digits(digits) if digits.is_empty())
    }

    /// Returns true for the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Calculator state machine.
///
/// Starts cleared. Every transition is total: input that cannot be applied
/// leaves the state untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    current: Entry,
    pending_operand: String,
    pending_operation: Option<Operation>,
}

impl CalculatorState {
    /// Creates a cleared state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current entry
    #[must_use]
    pub fn entry(&self) -> &Entry {
        &self.current
    }

    /// Returns the current entry as text (`""` when empty)
    #[must_use]
    pub fn current_entry(&self) -> &str {
        self.current.as_str()
    }

    /// Returns the pending operand (`""` when absent)
    #[must_use]
    pub fn pending_operand(&self) -> &str {
        &self.pending_operand
    }

    /// Returns the pending operation
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending_operation
    }

    /// Returns true when the state equals a freshly cleared one
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.current.is_empty()
            && self.pending_operand.is_empty()
            && self.pending_operation.is_none()
    }

    /// Resets all fields
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Appends a digit or the decimal point to the current entry.
    ///
    /// Other characters are ignored, as is any input while the entry shows
    /// the error sentinel.
    pub fn append_digit(&mut self, token: char) {
        if !(token.is_ascii_digit() || token == '.') {
            return;
        }
        let Entry::Digits(digits) = &mut self.current else {
            return;
        };
        if token == '.' && digits.contains('.') {
            return;
        }
        if digits == "0" {
            if token == '0' {
                return;
            }
            if token != '.' {
                digits.clear();
            }
        }
        digits.push(token);
    }

    /// Selects the operation to apply next.
    ///
    /// With an empty entry this only swaps the pending operator. Otherwise any
    /// outstanding computation is collapsed first and the result becomes the
    /// new pending operand.
    pub fn choose_operation(&mut self, op: Operation) {
        if self.current.is_error() {
            return;
        }
        if self.current.is_empty() {
            if !self.pending_operand.is_empty() {
                self.pending_operation = Some(op);
            }
            return;
        }
        if !self.pending_operand.is_empty() {
            self.compute();
            if self.current.is_error() {
                return;
            }
        }
        let operand = std::mem::take(&mut self.current);
        self.pending_operand = operand.as_str().to_string();
        self.pending_operation = Some(op);
    }

    /// Applies the pending operation to the pending operand and the entry.
    ///
    /// Does nothing unless both parse as numbers and an operation is pending.
    pub fn compute(&mut self) {
        let (Some(pending), Some(current)) = (
            parse_decimal(&self.pending_operand),
            parse_decimal(self.current.as_str()),
        ) else {
            return;
        };
        let Some(op) = self.pending_operation else {
            return;
        };

        self.current = match op.apply(pending, current) {
            Some(result) => Entry::Digits(format_number(result)),
            None => {
                tracing::debug!(
                    operation = %op,
                    pending,
                    current,
                    "computation has no numeric result"
                );
                Entry::Error
            }
        };
        self.pending_operation = None;
        self.pending_operand.clear();
    }

    /// Removes the last character of the entry; the error sentinel is removed
    /// as a whole.
    pub fn delete(&mut self) {
        match &mut self.current {
            Entry::Digits(digits) => {
                digits.pop();
            }
            Entry::Error => self.current = Entry::default(),
        }
    }
}
