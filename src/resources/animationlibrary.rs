//! Named animation clips for the player sprite sheet.
//!
//! Each clip describes how to reconfigure a
//! [`SpriteAnimation`](crate::components::animation::SpriteAnimation) when
//! the player switches animation. The built-in table covers the
//! `idle`/`idle_<dir>`/`walk_<dir>` names; a JSON file with the same shape
//! can replace it:
//!
//! ```json
//! {
//!   "idle_down": { "kind": "still", "frame": 0, "row": 0 },
//!   "walk_down": { "kind": "sequence", "start_frame": 2, "end_frame": 3, "row": 0, "interval": 15 }
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::animation::SpriteAnimation;

/// How to configure the animator for one animation name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationClip {
    /// A single pinned frame.
    Still { frame: u32, row: u32 },
    /// Frames `start_frame..=end_frame` starting on `row`, optionally
    /// changing the tick interval.
    Sequence {
        start_frame: u32,
        end_frame: u32,
        row: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interval: Option<u32>,
    },
}

impl AnimationClip {
    /// Apply this clip to an animator.
    pub fn apply(&self, animation: &mut SpriteAnimation) {
        match *self {
            AnimationClip::Still { frame, row } => animation.set_static_frame(frame, row),
            AnimationClip::Sequence {
                start_frame,
                end_frame,
                row,
                interval,
            } => {
                animation.set_animation(start_frame, end_frame, row);
                if let Some(interval) = interval {
                    animation.set_speed(interval);
                }
            }
        }
    }

    fn validate(&self, name: &str) -> Result<(), String> {
        match *self {
            AnimationClip::Sequence {
                start_frame,
                end_frame,
                ..
            } if end_frame < start_frame => Err(format!(
                "animation '{}' ends at frame {} before it starts at {}",
                name, end_frame, start_frame
            )),
            _ => Ok(()),
        }
    }
}

/// Registry of animation clips keyed by name.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AnimationLibrary {
    clips: FxHashMap<String, AnimationClip>,
}

impl Default for AnimationLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AnimationLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self {
            clips: FxHashMap::default(),
        }
    }

    /// The clip table for the bundled `player1` sheet.
    pub fn builtin() -> Self {
        let sequence = |start_frame, end_frame, interval| AnimationClip::Sequence {
            start_frame,
            end_frame,
            row: 0,
            interval,
        };
        let still = |frame| AnimationClip::Still { frame, row: 0 };

        let mut library = Self::new();
        library.insert("idle", sequence(0, 0, None));
        library.insert("idle_down", still(0));
        library.insert("idle_up", still(1));
        library.insert("idle_left", still(6));
        library.insert("idle_right", still(8));
        library.insert("walk_down", sequence(2, 3, Some(15)));
        library.insert("walk_up", sequence(4, 5, Some(15)));
        library.insert("walk_left", sequence(6, 7, Some(10)));
        library.insert("walk_right", sequence(8, 9, Some(10)));
        library
    }

    /// Parse a library from JSON, rejecting clips that end before they start.
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let clips: FxHashMap<String, AnimationClip> =
            serde_json::from_str(json).map_err(|e| format!("Invalid animation table: {}", e))?;
        for (name, clip) in clips.iter() {
            clip.validate(name)?;
        }
        Ok(Self { clips })
    }

    /// Load a library from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let library = Self::from_json_str(&json)?;
        info!(
            "Loaded {} animations from {}",
            library.len(),
            path.display()
        );
        Ok(library)
    }

    pub fn insert(&mut self, name: impl Into<String>, clip: AnimationClip) {
        self.clips.insert(name.into(), clip);
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<&AnimationClip> {
        self.clips.get(name.as_ref())
    }

    /// Apply the clip called `name`. Returns false if there is none.
    pub fn apply(&self, name: impl AsRef<str>, animation: &mut SpriteAnimation) -> bool {
        match self.get(name) {
            Some(clip) => {
                clip.apply(animation);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
