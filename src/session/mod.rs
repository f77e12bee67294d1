//! Session layer: the wizard's working state.
//!
//! A session is loaded from JSON (raw shape), validated and normalized into
//! `Session`, then consumed by the generation pipeline. No state outlives the
//! run; "start over" is `Session::default()`.

pub mod spec;
pub mod validate;
pub mod wizard;

pub use spec::{BasicInfo, SelectedComponents, Session, SessionSpec};
