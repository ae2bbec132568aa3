pub mod badge;
pub mod button;
pub mod card;
pub mod feedback;
pub mod field;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use badge::*;
pub use button::*;
#[allow(unused_imports)]
pub use card::*;
pub use feedback::*;
pub use field::*;
