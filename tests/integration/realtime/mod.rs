//! Realtime relay integration tests

mod relay_test;
mod socket_test;
