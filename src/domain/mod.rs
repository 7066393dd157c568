//! Domain layer - read-only views of the host's module graph.

pub mod model;
