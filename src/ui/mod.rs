//! UI utilities for terminal output
//!
//! This module provides user interface components like progress spinners
//! and paging of long outputs.

mod pager;
mod spinner;

pub use pager::page_output;
pub use spinner::{create_spinner, finish_spinner};
