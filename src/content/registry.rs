//! Screen keys and the registry of full-screen content blocks.

use super::screens;
use crate::model::OutputLine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Canonical identifier of one full-buffer content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenKey {
    Philosophy,
    Stack,
    Workflow,
    Proof,
    Contact,
    About,
    Rabbit,
    Help,
    Menu,
    Banner,
}

impl ScreenKey {
    pub const ALL: [ScreenKey; 10] = [
        ScreenKey::Philosophy,
        ScreenKey::Stack,
        ScreenKey::Workflow,
        ScreenKey::Proof,
        ScreenKey::Contact,
        ScreenKey::About,
        ScreenKey::Rabbit,
        ScreenKey::Help,
        ScreenKey::Menu,
        ScreenKey::Banner,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScreenKey::Philosophy => "philosophy",
            ScreenKey::Stack => "stack",
            ScreenKey::Workflow => "workflow",
            ScreenKey::Proof => "proof",
            ScreenKey::Contact => "contact",
            ScreenKey::About => "about",
            ScreenKey::Rabbit => "rabbit",
            ScreenKey::Help => "help",
            ScreenKey::Menu => "menu",
            ScreenKey::Banner => "banner",
        }
    }
}

impl fmt::Display for ScreenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only mapping from screen key to its rendered lines.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    screens: HashMap<ScreenKey, Vec<OutputLine>>,
}

impl ContentRegistry {
    /// Registry holding every built-in screen.
    pub fn builtin() -> Self {
        Self::from_blocks(ScreenKey::ALL.into_iter().map(|key| (key, builtin_block(key))))
    }

    /// Build a registry from static blocks. A key given twice keeps the last block.
    pub fn from_blocks<I>(blocks: I) -> Self
    where
        I: IntoIterator<Item = (ScreenKey, screens::StaticBlock)>,
    {
        let screens = blocks
            .into_iter()
            .map(|(key, block)| (key, lines_of(block)))
            .collect();
        Self { screens }
    }

    pub fn get(&self, key: ScreenKey) -> Option<&[OutputLine]> {
        self.screens.get(&key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: ScreenKey) -> bool {
        self.screens.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

fn builtin_block(key: ScreenKey) -> screens::StaticBlock {
    match key {
        ScreenKey::Philosophy => screens::PHILOSOPHY,
        ScreenKey::Stack => screens::STACK,
        ScreenKey::Workflow => screens::WORKFLOW,
        ScreenKey::Proof => screens::PROOF,
        ScreenKey::Contact => screens::CONTACT,
        ScreenKey::About => screens::ABOUT,
        ScreenKey::Rabbit => screens::RABBIT,
        ScreenKey::Help => screens::HELP,
        ScreenKey::Menu => screens::MENU,
        ScreenKey::Banner => screens::BANNER,
    }
}

/// Expand a static block into owned output lines.
pub fn lines_of(block: screens::StaticBlock) -> Vec<OutputLine> {
    block
        .iter()
        .map(|(kind, text)| OutputLine::new(*text, *kind))
        .collect()
}
