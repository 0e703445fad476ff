//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into cells on
//! the terminal.  No I/O happens here; every widget is a pure function of
//! its props.

pub mod claim_card;
pub mod claim_list;
pub mod layout;
pub mod overlay;
pub mod source_list;
pub mod support_indicator;
pub mod theme;
