// Adapters layer: concrete implementations of the domain ports. Only the
// in-memory backend lives here; real databases are someone else's crate.

pub mod memory;
