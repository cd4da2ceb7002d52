//! Testing utilities: a headless page driver and DOM outline snapshots.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::dump_tree;
