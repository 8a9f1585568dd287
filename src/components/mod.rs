mod banner;
mod grid;
mod nav;
mod progress;
mod skip_card;
mod summary;

pub use banner::ErrorBanner;
pub use grid::SkipGrid;
pub use nav::NavBar;
pub use progress::ProgressBar;
pub use skip_card::{SkeletonCard, SkipCard};
pub use summary::SelectionSummary;

// Glyphs used in place of an icon set.
pub(crate) const CHECK: &str = "✔";
pub(crate) const TRUCK: &str = "🚛";
pub(crate) const CLOCK: &str = "⏱";
