//! Config-driven tag badges for item tooltips
//!
//! [`TagBadges`] is the single piece of shared state: it owns the
//! hot-reloading [`ConfigStore`] behind a mutex and resolves an item's tags
//! into styled [`ResolvedTag`]s. The host wraps those in a [`TagLayout`],
//! which packs them into rows for the width it has available and produces
//! [`DrawOp`]s for the host renderer.
//!
//! ```no_run
//! use tooltip_tags::{ItemTags, MonospaceMetrics, TagBadges, TagLayout};
//!
//! let badges = TagBadges::load(TagBadges::default_path());
//! let item = ItemTags::new("minecraft:oak_planks", ["minecraft:planks"]);
//! if let Some(message) = badges.consume_config_error() {
//!     eprintln!("{message}");
//! }
//! let mut layout = TagLayout::new(badges.display_badges(&item));
//! let ops = layout.draw(&MonospaceMetrics::new(6, 9), 40, 60, 854);
//! ```

#![forbid(unsafe_code)]

pub mod color;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod paint;
pub mod resolver;
pub mod types;
pub mod wildcard;

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

pub use config::{ConfigStore, Policy, TagConfig, TagRule};
pub use error::ConfigError;
pub use layout::{FlowLayout, Row, TagLayout};
pub use metrics::{FontMetrics, MonospaceMetrics, TextMeasure};
pub use paint::DrawOp;
pub use resolver::{ItemTags, ResolvedTag, TagResolver, TaggedEntity};

/// Entry point held by the host for the lifetime of the process
#[derive(Debug)]
pub struct TagBadges {
    store: Mutex<ConfigStore>,
}

impl TagBadges {
    pub fn default_path() -> PathBuf {
        ConfigStore::default_path()
    }

    /// Load (or create) the config file at `path`
    pub fn load(path: impl Into<PathBuf>) -> Self {
        Self::from_store(ConfigStore::load(path))
    }

    pub fn from_store(store: ConfigStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Badges to show for `entity`, possibly none
    ///
    /// Reloads the config first if the file changed on disk. Reload and
    /// resolution happen under one lock, so a half-applied reload is never seen.
    pub fn display_badges(&self, entity: &impl TaggedEntity) -> Vec<ResolvedTag> {
        let mut store = self.store();
        store.check_and_reload();
        TagResolver::new(store.config()).resolve(entity)
    }

    /// Badge layout for `entity`, or `None` when there is nothing to show
    pub fn tooltip(&self, entity: &impl TaggedEntity) -> Option<TagLayout> {
        let tags = self.display_badges(entity);
        (!tags.is_empty()).then(|| TagLayout::new(tags))
    }

    /// Pending config error for the user, delivered once
    pub fn consume_config_error(&self) -> Option<String> {
        self.store().consume_error()
    }

    pub fn configured_rule_count(&self) -> usize {
        self.store().rule_count()
    }

    // A panic elsewhere can't leave the store half-written: every mutation
    // replaces whole fields.
    fn store(&self) -> MutexGuard<'_, ConfigStore> {
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
