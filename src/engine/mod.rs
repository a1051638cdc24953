//! Scroll-synchronization engines.
//!
//! Everything that derives UI state from scroll position lives here:
//! - frame-coalesced event sampling (`sampler`)
//! - normalized page progress (`progress`)
//! - the sticky story active-index mapping (`story`)
//! - visibility watching and its two consumers (`visibility`, `reveal`,
//!   `switcher`)
//!
//! Engines never touch the terminal. All layout reads go through the
//! [`viewport::Viewport`] trait so each engine can be unit-tested against
//! an in-memory provider.

pub mod progress;
pub mod reveal;
pub mod sampler;
pub mod story;
pub mod switcher;
pub mod viewport;
pub mod visibility;

// Re-exports for convenient access
pub use progress::{traversal_progress, ScrollProgress};
pub use reveal::{RevealEngine, REVEAL_THRESHOLD};
pub use sampler::ScrollSampler;
pub use story::StoryEngine;
pub use switcher::{ThemeSwitcher, THEME_THRESHOLDS};
pub use viewport::{ElemRect, Viewport};
pub use visibility::{RectWatcher, VisibilityEntry};
