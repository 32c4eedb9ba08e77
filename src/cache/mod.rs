//! Memoization of generation artifacts and per-root generation state.
//!
//! - `lru`: bounded, thread-safe LRU map
//! - `property`: structural property identities used as keys
//! - `context`: path-ordered per-root generation state
//! - `stats`: hit/miss/eviction counters
//!
//! # Example
//!
//! ```
//! use fixturepath::cache::{GenerationCache, PropertyKey, RootPropertyKey};
//! use std::sync::Arc;
//!
//! let cache: GenerationCache<String, u32> = GenerationCache::builder()
//!     .artifact_capacity(16)
//!     .build();
//!
//! let key = PropertyKey::new("String", "name");
//! assert!(cache.get_cached_artifact(&key).is_none());
//! cache.put_cached_artifact(key.clone(), "generator".to_string());
//! assert_eq!(cache.get_cached_artifact(&key).as_deref(), Some("generator"));
//!
//! let root = RootPropertyKey::new("Order");
//! let first = cache.retrieve_or_create_context(&root);
//! let second = cache.retrieve_or_create_context(&root);
//! assert!(Arc::ptr_eq(&first, &second));
//! ```

pub mod context;
pub mod lru;
pub mod property;
pub mod stats;

pub use context::GeneratorContext;
pub use lru::LruCache;
pub use property::{PropertyKey, PropertyKind, RootPropertyKey};
pub use stats::{CacheStats, CacheStatsSnapshot};

use std::sync::Arc;

use crate::config::Config;

/// Default number of cached artifacts.
pub const DEFAULT_ARTIFACT_CAPACITY: usize = 2048;

/// Default number of cached root contexts.
pub const DEFAULT_CONTEXT_CAPACITY: usize = 1000;

/// Artifact cache plus lazily created per-root generator contexts.
///
/// `A` is the cached artifact, `S` the per-node generation state.
#[derive(Debug)]
pub struct GenerationCache<A, S> {
    artifacts: LruCache<PropertyKey, A>,
    contexts: LruCache<RootPropertyKey, Arc<GeneratorContext<S>>>,
}

impl GenerationCache<(), ()> {
    /// Starts a builder; the artifact and state types come from `build`.
    pub fn builder() -> GenerationCacheBuilder {
        GenerationCacheBuilder::default()
    }
}

impl<A: Clone, S: Clone> GenerationCache<A, S> {
    pub fn new(artifact_capacity: usize, context_capacity: usize) -> Self {
        Self {
            artifacts: LruCache::new(artifact_capacity),
            contexts: LruCache::new(context_capacity),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.artifact_cache_capacity, config.context_cache_capacity)
    }

    pub fn get_cached_artifact(&self, property: &PropertyKey) -> Option<A> {
        let artifact = self.artifacts.get(property);
        tracing::trace!(%property, hit = artifact.is_some(), "artifact lookup");
        artifact
    }

    pub fn put_cached_artifact(&self, property: PropertyKey, artifact: A) {
        tracing::trace!(%property, "caching artifact");
        self.artifacts.put(property, artifact);
    }

    /// Returns the context for `root`, creating it on first access.
    ///
    /// At most one context is created per root while it stays cached, even
    /// when several threads ask for it at once.
    pub fn retrieve_or_create_context(&self, root: &RootPropertyKey) -> Arc<GeneratorContext<S>> {
        self.contexts.get_or_insert_with(root.clone(), |root| {
            tracing::trace!(%root, "creating generator context");
            Arc::new(GeneratorContext::new())
        })
    }

    pub fn artifact_stats(&self) -> CacheStatsSnapshot {
        self.artifacts.stats()
    }

    pub fn context_stats(&self) -> CacheStatsSnapshot {
        self.contexts.stats()
    }

    pub fn clear(&self) {
        self.artifacts.clear();
        self.contexts.clear();
    }
}

/// Builder for [`GenerationCache`].
#[derive(Debug, Clone)]
pub struct GenerationCacheBuilder {
    artifact_capacity: usize,
    context_capacity: usize,
}

impl Default for GenerationCacheBuilder {
    fn default() -> Self {
        Self {
            artifact_capacity: DEFAULT_ARTIFACT_CAPACITY,
            context_capacity: DEFAULT_CONTEXT_CAPACITY,
        }
    }
}

impl GenerationCacheBuilder {
    pub fn artifact_capacity(mut self, capacity: usize) -> Self {
        self.artifact_capacity = capacity;
        self
    }

    pub fn context_capacity(mut self, capacity: usize) -> Self {
        self.context_capacity = capacity;
        self
    }

    pub fn build<A: Clone, S: Clone>(self) -> GenerationCache<A, S> {
        GenerationCache::new(self.artifact_capacity, self.context_capacity)
    }
}
