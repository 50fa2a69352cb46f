//! Alias table: what a typed token means.
//!
//! Resolution is exact-match on the normalized input (trimmed, lowercased).
//! There is no prefix or fuzzy matching. The table is checked once at
//! construction so that every alias maps to exactly one command and every
//! screen it names has content.

use super::registry::{ContentRegistry, ScreenKey};
use std::collections::HashMap;
use std::fmt;

/// Commands that answer inline instead of replacing the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Ls,
    Whoami,
    Pwd,
    Date,
    Uname,
}

impl Builtin {
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Ls => "ls",
            Builtin::Whoami => "whoami",
            Builtin::Pwd => "pwd",
            Builtin::Date => "date",
            Builtin::Uname => "uname",
        }
    }
}

/// The outcome an alias resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Replace the buffer with a registered screen
    Screen(ScreenKey),
    /// Replace the buffer with nothing
    Clear,
    /// Replace the buffer with the farewell block
    Exit,
    /// Append an echo and a one-line answer
    Builtin(Builtin),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Screen(key) => write!(f, "screen:{key}"),
            Command::Clear => f.write_str("clear"),
            Command::Exit => f.write_str("exit"),
            Command::Builtin(b) => write!(f, "builtin:{}", b.name()),
        }
    }
}

/// Every accepted token and what it means.
pub const BUILTIN_ALIASES: &[(&str, Command)] = &[
    ("1", Command::Screen(ScreenKey::Philosophy)),
    ("why", Command::Screen(ScreenKey::Philosophy)),
    ("philosophy", Command::Screen(ScreenKey::Philosophy)),
    ("2", Command::Screen(ScreenKey::Stack)),
    ("stack", Command::Screen(ScreenKey::Stack)),
    ("tools", Command::Screen(ScreenKey::Stack)),
    ("3", Command::Screen(ScreenKey::Workflow)),
    ("workflow", Command::Screen(ScreenKey::Workflow)),
    ("flow", Command::Screen(ScreenKey::Workflow)),
    ("4", Command::Screen(ScreenKey::Proof)),
    ("proof", Command::Screen(ScreenKey::Proof)),
    ("meta", Command::Screen(ScreenKey::Proof)),
    ("5", Command::Screen(ScreenKey::Contact)),
    ("contact", Command::Screen(ScreenKey::Contact)),
    ("sysop", Command::Screen(ScreenKey::Contact)),
    ("about", Command::Screen(ScreenKey::About)),
    ("menu", Command::Screen(ScreenKey::Menu)),
    ("m", Command::Screen(ScreenKey::Menu)),
    ("help", Command::Screen(ScreenKey::Help)),
    ("?", Command::Screen(ScreenKey::Help)),
    ("banner", Command::Screen(ScreenKey::Banner)),
    ("home", Command::Screen(ScreenKey::Banner)),
    ("rabbit", Command::Screen(ScreenKey::Rabbit)),
    ("follow", Command::Screen(ScreenKey::Rabbit)),
    ("white rabbit", Command::Screen(ScreenKey::Rabbit)),
    ("clear", Command::Clear),
    ("cls", Command::Clear),
    ("exit", Command::Exit),
    ("quit", Command::Exit),
    ("logout", Command::Exit),
    ("ls", Command::Builtin(Builtin::Ls)),
    ("whoami", Command::Builtin(Builtin::Whoami)),
    ("pwd", Command::Builtin(Builtin::Pwd)),
    ("date", Command::Builtin(Builtin::Date)),
    ("uname", Command::Builtin(Builtin::Uname)),
    ("uname -a", Command::Builtin(Builtin::Uname)),
];

/// Trim surrounding whitespace and lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Result of looking up one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing but whitespace was submitted
    Empty,
    Command(Command),
    /// Normalized input with no alias
    Unknown(String),
}

/// Construction-time defects in an alias table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasError {
    /// The same token was listed more than once
    Duplicate {
        alias: String,
        first: Command,
        second: Command,
    },
    /// A token that normalization could never produce
    NotNormalized(String),
    /// An alias points at a screen the registry does not hold
    MissingScreen { alias: String, screen: ScreenKey },
}

impl fmt::Display for AliasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasError::Duplicate {
                alias,
                first,
                second,
            } => write!(f, "alias '{alias}' listed twice ({first} and {second})"),
            AliasError::NotNormalized(alias) => {
                write!(f, "alias '{alias}' is empty or not trimmed and lowercase")
            }
            AliasError::MissingScreen { alias, screen } => {
                write!(f, "alias '{alias}' targets screen '{screen}' which has no content")
            }
        }
    }
}

impl std::error::Error for AliasError {}

/// Token → command mapping, one outcome per token.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<String, Command>,
}

impl AliasTable {
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, AliasError>
    where
        I: IntoIterator<Item = &'a (&'a str, Command)>,
    {
        let mut map = HashMap::new();
        for (alias, command) in entries {
            if alias.is_empty() || normalize(alias) != *alias {
                return Err(AliasError::NotNormalized(alias.to_string()));
            }
            if let Some(first) = map.insert(alias.to_string(), *command) {
                return Err(AliasError::Duplicate {
                    alias: alias.to_string(),
                    first,
                    second: *command,
                });
            }
        }
        Ok(Self { entries: map })
    }

    /// Look up an already-normalized token.
    pub fn get(&self, normalized: &str) -> Option<Command> {
        self.entries.get(normalized).copied()
    }

    /// All aliases sorted by token, for listings.
    pub fn sorted(&self) -> Vec<(&str, Command)> {
        let mut all: Vec<(&str, Command)> =
            self.entries.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        all.sort_by(|a, b| a.0.cmp(b.0));
        all
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The alias table bound to the registry it points into.
#[derive(Debug, Clone)]
pub struct CommandTable {
    aliases: AliasTable,
    registry: ContentRegistry,
}

impl CommandTable {
    pub fn new(aliases: AliasTable, registry: ContentRegistry) -> Result<Self, AliasError> {
        for (alias, command) in aliases.sorted() {
            if let Command::Screen(screen) = command {
                if !registry.contains(screen) {
                    return Err(AliasError::MissingScreen {
                        alias: alias.to_string(),
                        screen,
                    });
                }
            }
        }
        Ok(Self { aliases, registry })
    }

    /// The shipped table. Panics if the literal tables are inconsistent,
    /// which is a build defect rather than anything a visitor can cause.
    pub fn builtin() -> Self {
        AliasTable::from_entries(BUILTIN_ALIASES)
            .and_then(|aliases| Self::new(aliases, ContentRegistry::builtin()))
            .unwrap_or_else(|e| panic!("built-in command table is invalid: {e}"))
    }

    pub fn resolve(&self, raw: &str) -> Resolution {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Resolution::Empty;
        }
        match self.aliases.get(&normalized) {
            Some(command) => Resolution::Command(command),
            None => Resolution::Unknown(normalized),
        }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }
}
