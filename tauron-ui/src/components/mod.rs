//! UI Components
//!
//! Shell chrome shared by the panels.

pub mod layout;
pub mod splash;

pub use layout::Layout;
pub use splash::Splash;
