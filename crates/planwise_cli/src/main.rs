//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `planwise_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("planwise_core version={}", planwise_core::core_version());

    let (importance, urgency) =
        planwise_core::estimate("important: file the quarterly report today", "");
    println!("sample estimate importance={importance} urgency={urgency}");
}
