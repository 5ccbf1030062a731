// src/crawl/mod.rs
// =============================================================================
// This module is the crawl engine.
//
// Submodules, leaves first:
// - normalize: keeps links on the seed's origin, one spelling per URL
// - visited: the claim set that stops a page being fetched twice
// - frontier: the queue of URLs waiting to be fetched
// - scheduler: the main loop, the worker pool and the "are we done?" check
// =============================================================================

mod frontier;
mod normalize;
mod scheduler;
mod visited;

pub use frontier::{Frontier, Popped};
pub use normalize::{resolve, Scope};
pub use scheduler::Crawler;
pub use visited::VisitedSet;
