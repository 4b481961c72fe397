//! The four binary operations

use serde::{Deserialize, Serialize};

/// Binary operation applied between the pending operand and the current entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the keyboard symbol, also used on the previous display line
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns the typographic label drawn on keypad buttons
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parses either the keyboard symbol or the keypad label
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "*" | "×" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operation, `pending` being the left-hand side.
    ///
    /// Returns `None` when the result is not a finite number, which covers
    /// division by zero (of either sign) and overflow.
    #[must_use]
    pub fn apply(&self, pending: f64, current: f64) -> Option<f64> {
        let result = match self {
            Self::Add => pending + current,
            Self::Subtract => pending - current,
            Self::Multiply => pending * current,
            Self::Divide => {
                if current == 0.0 {
                    return None;
                }
                pending / current
            }
        };
        result.is_finite().then_some(result)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
