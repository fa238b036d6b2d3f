//! Device frame catalog and the active-frame registry.
//!
//! A frame names a target device screen and its pixel dimensions. The
//! catalog is process-wide static data, read-only after startup; the
//! registry tracks which entry is active. Switching frames is the trigger
//! for the proportional rescale in [`crate::rescale`].

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

/// An immutable catalog entry: a named device screen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Stable identifier used by selection input.
    pub key: &'static str,
    /// Display name.
    pub label: &'static str,
    /// Target artboard width in pixels.
    pub width: i32,
    /// Target artboard height in pixels.
    pub height: i32,
}

impl Frame {
    /// Display string for the frame info readout, e.g. `iPhone 16: 393×852`.
    #[must_use]
    pub fn info(&self) -> String {
        format!("{}: {}×{}", self.label, self.width, self.height)
    }

    /// Width-to-height aspect ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Key of the frame that is active on startup. First entry of [`CATALOG`].
pub const DEFAULT_FRAME_KEY: &str = "iphone16";

/// The device catalog, in selector display order. The default frame is the
/// first entry.
pub const CATALOG: &[Frame] = &[
    Frame { key: "iphone16", label: "iPhone 16", width: 393, height: 852 },
    Frame { key: "iphone16pro", label: "iPhone 16 Pro", width: 402, height: 874 },
    Frame { key: "iphone16promax", label: "iPhone 16 Pro Max", width: 440, height: 956 },
    Frame { key: "iphone16plus", label: "iPhone 16 Plus", width: 430, height: 932 },
    Frame { key: "iphone1415promax", label: "iPhone 14 & 15 Pro Max", width: 430, height: 932 },
    Frame { key: "iphone1415pro", label: "iPhone 14 & 15 Pro", width: 393, height: 852 },
    Frame { key: "iphone1314", label: "iPhone 13 & 14", width: 390, height: 844 },
    Frame { key: "mba", label: "MacBook Air", width: 1280, height: 832 },
    Frame { key: "mbp14", label: "MacBook Pro 14\"", width: 1512, height: 982 },
    Frame { key: "mbp16", label: "MacBook Pro 16\"", width: 1728, height: 1117 },
    Frame { key: "desktop1440", label: "Desktop", width: 1440, height: 1024 },
];

/// Look up a catalog entry by key.
#[must_use]
pub fn frame(key: &str) -> Option<&'static Frame> {
    CATALOG.iter().find(|f| f.key == key)
}

/// Tracks which catalog entry is active. The active frame is replaced
/// wholesale on selection change; it never merges with the previous one.
pub struct FrameRegistry {
    active: &'static Frame,
}

impl FrameRegistry {
    /// Registry with the default frame active.
    #[must_use]
    pub fn new() -> Self {
        Self { active: &CATALOG[0] }
    }

    /// The currently active frame.
    #[must_use]
    pub fn active(&self) -> &'static Frame {
        self.active
    }

    /// Key of the currently active frame.
    #[must_use]
    pub fn active_key(&self) -> &'static str {
        self.active.key
    }

    /// Make the frame with the given key active. Unknown keys fail silently:
    /// no state change, returns `false`.
    pub fn set_active(&mut self, key: &str) -> bool {
        match frame(key) {
            Some(f) => {
                self.active = f;
                true
            }
            None => false,
        }
    }
}

impl Default for FrameRegistry {
    fn default() -> Self {
        Self::new()
    }
}
