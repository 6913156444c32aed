//! End-to-end tests driving the full router in-process.

mod items_test;
mod notification_test;
