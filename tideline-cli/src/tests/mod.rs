//! Shared test harness modules for the Tideline CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod activities_unit;
mod helpers;
mod serve_unit;
