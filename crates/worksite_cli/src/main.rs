//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `worksite_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("worksite_core ping={}", worksite_core::ping());
    println!("worksite_core version={}", worksite_core::core_version());
}
