//! Report-generation workflows, grouped by assessment stream.

pub mod express_entry;
