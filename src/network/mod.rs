mod roster;

pub use roster::{NetworkBoundary, SharedRoster};
