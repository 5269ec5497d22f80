pub mod theme_ctx;
pub mod themes;
pub mod toggle;

pub mod prelude {
    pub use super::theme_ctx::{ThemeCtx, ThemeCtxSub, ThemeStore, WithTheme};
    pub use super::themes::{ResolvedTheme, Theme, ThemePreference};
    pub use super::toggle::ThemeToggle;
}
