//! Terminal view layer: app state, keyboard routing, keypad, rendering.

pub mod app;
pub mod input;
pub mod keypad;
pub mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget};
pub use ui::{layout, render, ScreenAreas};
