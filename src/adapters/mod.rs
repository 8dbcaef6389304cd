// Adapters layer: concrete implementations for external systems.
// Local file/stdio adapters live in config::cli next to the flags that select them.

pub mod http;
