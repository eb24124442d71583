pub mod game;
pub mod index;
pub mod spm;

pub type Set<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
