//! TypeScript types for the dashboard shell are generated by `build.rs`.
