//! Small form and feedback primitives shared by the views.

mod badge;
mod button;
mod feedback;
mod input;

pub use badge::{Badge, StatCard};
pub use button::{Button, ButtonVariant};
pub use feedback::{EmptyState, ErrorBanner, Spinner};
pub use input::{Checkbox, Input, Label, Select, Textarea};
