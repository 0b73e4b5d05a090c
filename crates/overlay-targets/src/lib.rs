pub mod bounds;

#[cfg(windows)]
mod win;

#[cfg(windows)]
pub use win::WindowImpl;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A top-level window owned by another process, usable as an overlay target.
#[cfg(windows)]
#[derive(Clone, Copy, Debug)]
pub struct Window(WindowImpl);

#[cfg(windows)]
impl Window {
    /// Visible top-level windows of other processes, top of z-order first.
    pub fn list() -> Vec<Self> {
        WindowImpl::list().into_iter().map(Self).collect()
    }

    /// First window whose title contains `needle` (case-insensitive).
    pub fn find_by_title(needle: &str) -> Option<Self> {
        let needle = needle.to_lowercase();
        Self::list().into_iter().find(|w| {
            w.name()
                .map(|name| name.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
    }

    pub fn id(&self) -> WindowId {
        WindowId(self.0.raw())
    }

    pub fn name(&self) -> Option<String> {
        self.0.name()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WindowId(isize);

impl WindowId {
    pub fn new(raw: isize) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> isize {
        self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl FromStr for WindowId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s.strip_prefix("0x") {
            Some(hex) => isize::from_str_radix(hex, 16),
            None => s.parse::<isize>(),
        };
        parsed.map(Self).map_err(|_| "Invalid window ID".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_id_parses_decimal_and_hex() {
        assert_eq!("4242".parse::<WindowId>().unwrap(), WindowId::new(4242));
        assert_eq!("0x1a2b".parse::<WindowId>().unwrap(), WindowId::new(0x1a2b));
        assert!("not-a-window".parse::<WindowId>().is_err());
    }

    #[cfg(windows)]
    #[test]
    fn find_by_title_misses_unknown_title() {
        assert!(Window::find_by_title("no window is titled 7f3c9d1e").is_none());
        assert!(Window::list().iter().all(|w| w.id().raw() != 0));
    }

    #[test]
    fn window_id_display_is_hex() {
        assert_eq!(WindowId::new(255).to_string(), "0xff");
    }
}
