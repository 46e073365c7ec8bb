//! Tag → badge resolution
//!
//! Order of the output: the item's configured badges first (config order),
//! then its tags (own tags, then block tags, duplicates dropped) filtered
//! and styled by the active [`Policy`].

use indexmap::IndexSet;
use tracing::trace;

use crate::color::{color_from_name, opaque};
use crate::config::{Policy, TagConfig, TagRule};
use crate::constants::config::CUSTOM_TAG_ID;
use crate::display::derive_display_name;
use crate::wildcard;

/// A styled badge ready for layout
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedTag {
    pub text: String,
    /// `0xAARRGGBB`, alpha always `0xFF`
    pub argb: u32,
}

/// Host-side view of something carrying tags
pub trait TaggedEntity {
    /// Registry id used to look up per-item badges
    fn item_id(&self) -> &str;

    /// The entity's own tags
    fn tags(&self) -> Vec<String>;

    /// Tags of the default block state for block items
    fn block_tags(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Owned [`TaggedEntity`] for hosts that collect tags up front
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemTags {
    pub id: String,
    pub tags: Vec<String>,
    pub block_tags: Vec<String>,
}

impl ItemTags {
    pub fn new<I, S>(id: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            block_tags: Vec::new(),
        }
    }

    pub fn with_block_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.block_tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl TaggedEntity for ItemTags {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn block_tags(&self) -> Vec<String> {
        self.block_tags.clone()
    }
}

/// How a tag matched `tagList`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatch<'a> {
    Exact(&'a TagRule),
    /// Display comes from the tag itself, only `hidden` is honored
    Wildcard(&'a TagRule),
}

impl<'a> RuleMatch<'a> {
    pub fn rule(&self) -> &'a TagRule {
        match self {
            RuleMatch::Exact(rule) | RuleMatch::Wildcard(rule) => rule,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, RuleMatch::Wildcard(_))
    }
}

/// Read-only resolver over one config snapshot
pub struct TagResolver<'a> {
    config: &'a TagConfig,
}

impl<'a> TagResolver<'a> {
    pub fn new(config: &'a TagConfig) -> Self {
        Self { config }
    }

    pub fn resolve(&self, entity: &impl TaggedEntity) -> Vec<ResolvedTag> {
        let mut result = Vec::new();

        if let Some(custom) = self.config.item_tags.get(entity.item_id()) {
            result.extend(
                custom
                    .iter()
                    .map(|rule| resolve_tag(CUSTOM_TAG_ID, rule, false)),
            );
        }

        let tags: IndexSet<String> = entity
            .tags()
            .into_iter()
            .chain(entity.block_tags())
            .collect();

        for tag_id in &tags {
            let found = self.find_match(tag_id);
            let shown = match (self.config.policy, found) {
                (Policy::Whitelist, Some(m)) => Some(resolve_tag(tag_id, m.rule(), m.is_wildcard())),
                (Policy::Whitelist, None) => None,
                (Policy::Blacklist, None) => {
                    Some(resolve_tag(tag_id, &TagRule::default(), false))
                }
                (Policy::Blacklist, Some(m)) if m.rule().is_hidden() => None,
                (Policy::Blacklist, Some(m)) => {
                    Some(resolve_tag(tag_id, m.rule(), m.is_wildcard()))
                }
            };
            if let Some(tag) = shown {
                result.push(tag);
            }
        }

        trace!(
            item = entity.item_id(),
            tags = tags.len(),
            badges = result.len(),
            "Resolved tag badges"
        );
        result
    }

    /// Exact key first, otherwise the first `*` pattern in config order
    pub fn find_match(&self, tag_id: &str) -> Option<RuleMatch<'a>> {
        if let Some(rule) = self.config.tag_list.get(tag_id) {
            return Some(RuleMatch::Exact(rule));
        }
        self.config
            .tag_list
            .iter()
            .find(|(pattern, _)| wildcard::is_pattern(pattern) && wildcard::matches(pattern, tag_id))
            .map(|(_, rule)| RuleMatch::Wildcard(rule))
    }
}

/// Build a badge for `tag_id`, preferring the rule's text/color unless told otherwise
fn resolve_tag(tag_id: &str, rule: &TagRule, ignore_rule_display: bool) -> ResolvedTag {
    let text = match &rule.text {
        Some(text) if !ignore_rule_display => text.clone(),
        _ => derive_display_name(tag_id),
    };
    let color = match rule.color {
        Some(color) if !ignore_rule_display => color,
        _ => color_from_name(&text),
    };
    ResolvedTag {
        text,
        argb: opaque(color),
    }
}
