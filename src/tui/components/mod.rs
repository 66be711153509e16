//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: screen title, completion summary, status message
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrowing it is
//! built each frame for rendering:
//!
//! - `BookingListState` / `BookingList`: the list screen
//! - `BookingFormState` / `BookingForm`: the add-booking screen
//! - `DateRangePickerState` / `DateRangePicker`: the modal date range picker
//! - `InputBox`: the single-line name field inside the form
//!
//! Each component file keeps its state type, event type, rendering, event
//! handling and tests together.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top status bar)
//! ├── booking_list.rs  (list screen)
//! ├── booking_form.rs  (add-booking screen)
//! ├── date_picker.rs   (date range overlay)
//! └── input_box/       (single-line text field)
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

pub mod booking_form;
pub mod booking_list;
pub mod date_picker;
pub mod input_box;
mod title_bar;

pub use booking_form::{BookingForm, BookingFormState, FormEvent};
pub use booking_list::{BookingList, BookingListState, ListEvent};
pub use date_picker::{DateRangePicker, DateRangePickerState, PickerEvent};
pub use title_bar::TitleBar;

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
