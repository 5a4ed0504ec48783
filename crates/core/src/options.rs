//! Mod options exposed to the host's settings menu
//!
//! Mods own their option objects and read values from them inside hook
//! handlers; the host UI only ever sees [`OptionDesc`] snapshots and
//! sends value changes back through the registry. Note the SDK ordering:
//! by the time a mod's `option_changed` runs, the new value has already
//! been stored.
//!
//! # Example
//!
//! ```ignore
//! use bl2rust_core::options::Slider;
//!
//! let mut multiplier = Slider::new("Multiplier", "The amount to multiply spawns by.", 1)
//!     .with_min(1)
//!     .with_max(25);
//!
//! multiplier.set(30);
//! assert_eq!(multiplier.value(), 25);
//! ```

use serde::{Deserialize, Serialize};

/// A value delivered from the host's settings menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OptionValue {
    /// New slider position
    Int(i32),
    /// New spinner choice
    Choice(String),
}

/// A change notification for a single option
#[derive(Debug, Clone, PartialEq)]
pub struct OptionChange {
    /// Caption of the option that changed
    pub caption: String,
    /// The value the menu stored
    pub value: OptionValue,
}

impl OptionChange {
    pub fn int(caption: &str, value: i32) -> Self {
        Self {
            caption: caption.to_string(),
            value: OptionValue::Int(value),
        }
    }

    pub fn choice(caption: &str, choice: &str) -> Self {
        Self {
            caption: caption.to_string(),
            value: OptionValue::Choice(choice.to_string()),
        }
    }
}

/// Snapshot of one option, serialized for the host UI
#[derive(Debug, Clone, Serialize)]
pub struct OptionDesc {
    pub caption: String,
    pub description: String,
    #[serde(flatten)]
    pub kind: OptionKind,
}

/// The widget an option renders as
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionKind {
    Slider {
        min: i32,
        max: i32,
        step: i32,
        value: i32,
    },
    Spinner {
        choices: Vec<String>,
        selected: String,
    },
}

/// An integer option with a bounded range
#[derive(Debug, Clone)]
pub struct Slider {
    caption: &'static str,
    description: &'static str,
    min: i32,
    max: i32,
    step: i32,
    value: i32,
}

impl Slider {
    pub fn new(caption: &'static str, description: &'static str, starting_value: i32) -> Self {
        Self {
            caption,
            description,
            min: i32::MIN,
            max: i32::MAX,
            step: 1,
            value: starting_value,
        }
    }

    /// Set minimum value (builder pattern)
    pub fn with_min(mut self, min: i32) -> Self {
        self.min = min;
        self.value = self.value.max(min);
        self
    }

    /// Set maximum value (builder pattern)
    pub fn with_max(mut self, max: i32) -> Self {
        self.max = max;
        self.value = self.value.min(max);
        self
    }

    /// Set step increment (builder pattern)
    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step;
        self
    }

    pub fn caption(&self) -> &'static str {
        self.caption
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Store a new value, clamped to the slider's range
    ///
    /// Returns the value actually stored.
    pub fn set(&mut self, value: i32) -> i32 {
        self.value = value.clamp(self.min, self.max);
        self.value
    }

    pub fn descriptor(&self) -> OptionDesc {
        OptionDesc {
            caption: self.caption.to_string(),
            description: self.description.to_string(),
            kind: OptionKind::Slider {
                min: self.min,
                max: self.max,
                step: self.step,
                value: self.value,
            },
        }
    }
}

/// A choice among a fixed set of captions
#[derive(Debug, Clone)]
pub struct Spinner {
    caption: &'static str,
    description: &'static str,
    choices: &'static [&'static str],
    selected: usize,
}

impl Spinner {
    pub fn new(
        caption: &'static str,
        description: &'static str,
        starting_choice: &str,
        choices: &'static [&'static str],
    ) -> Self {
        let selected = choices
            .iter()
            .position(|&c| c == starting_choice)
            .unwrap_or(0);
        Self {
            caption,
            description,
            choices,
            selected,
        }
    }

    pub fn caption(&self) -> &'static str {
        self.caption
    }

    pub fn current(&self) -> &'static str {
        self.choices[self.selected]
    }

    /// Store a new choice; unknown captions are ignored
    ///
    /// Returns `true` if the choice was recognized.
    pub fn set(&mut self, choice: &str) -> bool {
        match self.choices.iter().position(|&c| c == choice) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn descriptor(&self) -> OptionDesc {
        OptionDesc {
            caption: self.caption.to_string(),
            description: self.description.to_string(),
            kind: OptionKind::Spinner {
                choices: self.choices.iter().map(|c| c.to_string()).collect(),
                selected: self.current().to_string(),
            },
        }
    }
}
