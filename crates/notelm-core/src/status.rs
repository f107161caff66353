//! Glyph-prefixed status lines for user-facing output.
//!
//! These are the launcher's interface to the operator, distinct from tracing
//! diagnostics. Rendering the glyphs correctly on Windows depends on the
//! console normalizer having run.

pub fn print_error(message: &str) {
    eprintln!("❌ {message}");
}

pub fn print_success(message: &str) {
    println!("✅ {message}");
}

pub fn print_warning(message: &str) {
    println!("⚠️ {message}");
}

pub fn print_info(message: &str) {
    println!("ℹ️ {message}");
}
