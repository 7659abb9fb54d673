//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so
//! release builds remain quiet. Call sites are further gated by
//! `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit UI interaction logs (picker changes, swaps).
    pub print_ui_interactions: bool,
    /// Emit loader progress (provider used, record counts, elapsed time).
    pub print_loader_progress: bool,
    /// Emit icon fallback switches.
    pub print_icon_fallbacks: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_loader_progress: true,
    print_icon_fallbacks: false,
    print_shutdown: false,
};
