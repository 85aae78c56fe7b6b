// src/lib.rs
// Library half of kvctl so the binary and the integration tests share it
pub mod ctl;
