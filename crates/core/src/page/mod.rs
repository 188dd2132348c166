//! Page layer - the thin controller that owns store access, plus the
//! page-level behaviors expressed as pure logic.

pub mod counter;

mod page_controller;
mod page_model;

#[cfg(test)]
mod page_controller_tests;

pub use counter::{counter_plan, CounterPlan};
pub use page_controller::PageController;
pub use page_model::{query_param, year_stamp, MenuState, PageRender, PriceRefresh};
