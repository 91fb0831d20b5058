//! Matrix views and baseline implementations.
//!
//! The reference multiply and transpose helpers are the correctness
//! baselines the blocked engine is tested against.

pub mod reference;
pub mod transpose;
pub mod view;

pub use view::{MatMut, MatRef};
