//! Tag rule config as stored on disk
//!
//! JSON layout:
//! ```json
//! {
//!   "useBlacklist": false,
//!   "itemTags": { "minecraft:diamond_sword": [ { "text": "PvP", "color": 5592575 } ] },
//!   "tagList": { "minecraft:mineable/*": { "hidden": true } }
//! }
//! ```
//! Both maps keep file order. Among several matching wildcard patterns the
//! first one in `tagList` order wins.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::color::RGB_MASK;

/// Which tags the resolver shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    /// Only tags matching `tagList` are shown; `hidden` is ignored
    #[default]
    Whitelist,
    /// Every tag is shown unless its match has `hidden: true`
    Blacklist,
}

/// Display rule for a tag, a tag pattern, or a per-item badge
///
/// Missing `text`/`color` are derived from the tag id; missing `hidden`
/// means visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// 24-bit `0xRRGGBB`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

impl TagRule {
    pub fn styled(text: impl Into<String>, color: u32) -> Self {
        Self {
            text: Some(text.into()),
            color: Some(color),
            hidden: None,
        }
    }

    pub fn hidden() -> Self {
        Self {
            hidden: Some(true),
            ..Self::default()
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden == Some(true)
    }
}

/// Whole tag config, replaced wholesale on every reload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagConfig {
    #[serde(
        rename = "useBlacklist",
        default,
        deserialize_with = "deserialize_policy",
        serialize_with = "serialize_policy"
    )]
    pub policy: Policy,

    /// Item id → badges always attached to that item, in order
    #[serde(default)]
    pub item_tags: IndexMap<String, Vec<TagRule>>,

    /// Exact tag id or `*` pattern → rule
    #[serde(default)]
    pub tag_list: IndexMap<String, TagRule>,
}

/// `useBlacklist: true` selects [`Policy::Blacklist`]
fn deserialize_policy<'de, D>(deserializer: D) -> Result<Policy, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let use_blacklist = bool::deserialize(deserializer)?;
    Ok(if use_blacklist {
        Policy::Blacklist
    } else {
        Policy::Whitelist
    })
}

fn serialize_policy<S>(policy: &Policy, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_bool(*policy == Policy::Blacklist)
}

impl TagConfig {
    /// Config written on first run; doubles as documentation for users
    pub fn with_examples() -> Self {
        let mut config = Self::default();

        // Whitelist: only tags in tagList are shown.
        // Blacklist: everything is shown except tagList entries with hidden=true.
        config.policy = Policy::Whitelist;

        config.item_tags.insert(
            "minecraft:diamond_sword".to_string(),
            vec![
                TagRule::styled("Favorite", 0x55FF55),
                TagRule::styled("PvP", 0x5555FF),
            ],
        );

        // text/color optional; wildcard matches always derive them from the tag
        config
            .tag_list
            .insert("forge:tools/pickaxes".to_string(), TagRule::default());
        config
            .tag_list
            .insert("forge:tools/swords".to_string(), TagRule::styled("Blade", 0xFF5555));
        config
            .tag_list
            .insert("minecraft:mineable/*".to_string(), TagRule::hidden());
        config
            .tag_list
            .insert("minecraft:planks".to_string(), TagRule::styled("Wood", 0x8B4513));

        config
    }

    /// Number of configured entries (per-item lists plus tag rules)
    pub fn rule_count(&self) -> usize {
        self.item_tags.len() + self.tag_list.len()
    }

    /// Fix values that can't be honored as written
    /// Called after every successful parse
    pub fn validate(&mut self) {
        let before = self.tag_list.len();
        self.tag_list.retain(|pattern, _| !pattern.is_empty());
        if self.tag_list.len() != before {
            warn!("tagList contains an empty pattern, ignoring it");
        }

        let rules = self
            .item_tags
            .iter_mut()
            .flat_map(|(key, rules)| rules.iter_mut().map(move |rule| (key, rule)))
            .chain(self.tag_list.iter_mut());
        for (key, rule) in rules {
            if let Some(color) = rule.color
                && color > RGB_MASK
            {
                warn!(key = %key, color = color, "color wider than 24 bits, masking");
                rule.color = Some(color & RGB_MASK);
            }
        }
    }
}
