//! Console UTF-8 normalization for Windows hosts.
//!
//! Status output uses non-ASCII glyphs which corrupt or crash on legacy
//! console code pages. Best-effort: every internal error is swallowed so
//! this cosmetic step can never block dispatch.

/// Switch the console to UTF-8 and instruct child interpreters to do the
/// same. Call once at process start, before any other threads exist.
/// No-op on non-Windows hosts.
pub fn normalize_console_utf8() {
    #[cfg(target_os = "windows")]
    windows::normalize();
}

#[cfg(target_os = "windows")]
mod windows {
    use notelm_core::config::env_keys::PYTHONIOENCODING;
    use windows_sys::Win32::System::Console::{SetConsoleCP, SetConsoleOutputCP};

    const CP_UTF8: u32 = 65001;

    pub(super) fn normalize() {
        // A failed call leaves the legacy code page in place; output then
        // degrades to replacement characters instead of aborting dispatch.
        unsafe {
            SetConsoleOutputCP(CP_UTF8);
            SetConsoleCP(CP_UTF8);
        }

        // SAFETY: called at process start, before any other threads exist.
        unsafe { std::env::set_var(PYTHONIOENCODING, "utf-8") };
    }
}
