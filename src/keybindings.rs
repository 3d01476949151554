//! Keybinding registry: maps actions to key events with config overrides.
//!
//! Bindings are data, not match arms: the defaults are registered once and
//! users can rebind any action from `[keybindings]` in config.toml.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NavDown,
    NavUp,
    NextCategory,
    PrevCategory,
    EnterSearch,
    ExitSearch,
    CommitSearch,
    ClearSearch,
    ToggleTheme,
    ShowHelp,
    Back,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::NavDown => "Move cursor down",
            Self::NavUp => "Move cursor up",
            Self::NextCategory => "Next category",
            Self::PrevCategory => "Previous category",
            Self::EnterSearch => "Start typing a search",
            Self::ExitSearch => "Clear search and stop typing",
            Self::CommitSearch => "Keep search and stop typing",
            Self::ClearSearch => "Clear search text",
            Self::ToggleTheme => "Toggle light/dark theme",
            Self::ShowHelp => "Show help",
            Self::Back => "Clear search, then reset category",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context. Determines which bindings are active.
///
/// Contexts do not fall back to each other: Search never sees Global
/// bindings, otherwise typing "q" would quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    /// Browsing: keys are commands.
    Global,
    /// Typing into the search bar: unbound printable keys edit the query.
    Search,
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Whether this key inserts a character when typed into a text field.
    pub fn types_text(&self) -> bool {
        matches!(self.code, KeyCode::Char(_))
            && !self
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }

    /// Drop SHIFT where the key code already encodes it.
    ///
    /// Terminals report `?` and `BackTab` with SHIFT set; bindings are
    /// registered without it.
    fn normalized(self) -> Self {
        match self.code {
            KeyCode::Char(_) | KeyCode::BackTab => {
                Self::new(self.code, self.modifiers.difference(KeyModifiers::SHIFT))
            }
            _ => self,
        }
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "j", "/"
/// - Named keys: "Enter", "Esc", "Tab", "BackTab", "Up", "Down", "Left", "Right"
/// - Modifier combos: "Ctrl+t"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let rest = rest.trim();
        let mut chars = rest.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeySpec::ctrl(c)),
            _ => None,
        };
    }

    match s.to_lowercase().as_str() {
        "enter" | "return" => return Some(KeySpec::plain(KeyCode::Enter)),
        "esc" | "escape" => return Some(KeySpec::plain(KeyCode::Esc)),
        "tab" => return Some(KeySpec::plain(KeyCode::Tab)),
        "backtab" | "shift+tab" => return Some(KeySpec::plain(KeyCode::BackTab)),
        "up" => return Some(KeySpec::plain(KeyCode::Up)),
        "down" => return Some(KeySpec::plain(KeyCode::Down)),
        "left" => return Some(KeySpec::plain(KeyCode::Left)),
        "right" => return Some(KeySpec::plain(KeyCode::Right)),
        "backspace" => return Some(KeySpec::plain(KeyCode::Backspace)),
        "space" => return Some(KeySpec::plain(KeyCode::Char(' '))),
        _ => {}
    }

    if let Some(n) = s.strip_prefix(['F', 'f']).and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Some(KeySpec::plain(KeyCode::F(n)));
        }
        return None;
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeySpec::plain(KeyCode::Char(c))),
        _ => None,
    }
}

/// Format a KeySpec as a human-readable string for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Registry of keybindings, supporting default bindings and config overrides.
pub struct KeybindingRegistry {
    /// Primary lookup: (Context, KeySpec) -> Action
    lookup: HashMap<(Context, KeySpec), Action>,
    /// All bindings in registration order, for the help screen
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    /// Create a registry with the default bindings.
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    /// Bind `key` to `action`, evicting whatever else held the key in `context`.
    fn rebind(
        &mut self,
        context: Context,
        key: KeySpec,
        action: Action,
        warnings: &mut Vec<String>,
    ) {
        if let Some(other) = self.lookup.get(&(context, key)).copied() {
            if other != action {
                warnings.push(format!(
                    "Key '{}' was bound to '{}' in {:?} mode, now bound to '{}'",
                    format_key(&key),
                    other.describe(),
                    context,
                    action.describe()
                ));
                self.bindings.retain(|(c, k, _)| !(*c == context && *k == key));
            }
        }
        self.bind(context, key, action);
    }

    fn register_defaults(&mut self) {
        use Context::{Global, Search};

        // === Browse ===
        self.bind(Global, KeySpec::plain(KeyCode::Char('q')), Action::Quit);
        self.bind(Global, KeySpec::ctrl('c'), Action::Quit);

        self.bind(Global, KeySpec::plain(KeyCode::Char('j')), Action::NavDown);
        self.bind(Global, KeySpec::plain(KeyCode::Down), Action::NavDown);
        self.bind(Global, KeySpec::plain(KeyCode::Char('k')), Action::NavUp);
        self.bind(Global, KeySpec::plain(KeyCode::Up), Action::NavUp);

        self.bind(Global, KeySpec::plain(KeyCode::Char('l')), Action::NextCategory);
        self.bind(Global, KeySpec::plain(KeyCode::Right), Action::NextCategory);
        self.bind(Global, KeySpec::plain(KeyCode::Tab), Action::NextCategory);
        self.bind(Global, KeySpec::plain(KeyCode::Char('h')), Action::PrevCategory);
        self.bind(Global, KeySpec::plain(KeyCode::Left), Action::PrevCategory);
        self.bind(Global, KeySpec::plain(KeyCode::BackTab), Action::PrevCategory);

        self.bind(Global, KeySpec::plain(KeyCode::Char('/')), Action::EnterSearch);
        self.bind(Global, KeySpec::plain(KeyCode::Char('t')), Action::ToggleTheme);
        self.bind(Global, KeySpec::plain(KeyCode::Char('?')), Action::ShowHelp);
        self.bind(Global, KeySpec::plain(KeyCode::Esc), Action::Back);

        // === Search ===
        self.bind(Search, KeySpec::plain(KeyCode::Esc), Action::ExitSearch);
        self.bind(Search, KeySpec::plain(KeyCode::Enter), Action::CommitSearch);
        self.bind(Search, KeySpec::ctrl('u'), Action::ClearSearch);
        self.bind(Search, KeySpec::ctrl('t'), Action::ToggleTheme);
        self.bind(Search, KeySpec::ctrl('c'), Action::Quit);
        self.bind(Search, KeySpec::plain(KeyCode::Down), Action::NavDown);
        self.bind(Search, KeySpec::plain(KeyCode::Up), Action::NavUp);
        self.bind(Search, KeySpec::plain(KeyCode::Tab), Action::NextCategory);
        self.bind(Search, KeySpec::plain(KeyCode::BackTab), Action::PrevCategory);
    }

    /// Apply user overrides from config keybindings map.
    ///
    /// Keys in the map are action names (e.g., "quit", "toggle_theme").
    /// Values are key strings (e.g., "q", "Ctrl+t", "F5"). The new key
    /// replaces every existing binding of that action, in each context the
    /// action was bound in. A printable key is never bound in search mode;
    /// the action keeps its previous search binding instead. A key taken from
    /// another action is removed from that action.
    ///
    /// Returns a list of warnings for unrecognized action names, unparseable
    /// keys and bindings that were kept or evicted.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        // Sorted so that conflicting overrides resolve the same way every run
        let mut entries: Vec<(&String, &String)> = overrides.iter().collect();
        entries.sort();

        for (action_name, key_str) in entries {
            let Some(action) = parse_action_name(action_name) else {
                warnings.push(format!("Unknown action '{}', ignoring", action_name));
                continue;
            };

            let Some(key) = parse_key_string(key_str) else {
                warnings.push(format!(
                    "Cannot parse key '{}' for action '{}', ignoring",
                    key_str, action_name
                ));
                continue;
            };

            let previous: Vec<(Context, KeySpec)> = self
                .bindings
                .iter()
                .filter(|(_, _, a)| *a == action)
                .map(|(ctx, k, _)| (*ctx, *k))
                .collect();
            let mut contexts: Vec<Context> = Vec::new();
            for (ctx, _) in &previous {
                if !contexts.contains(ctx) {
                    contexts.push(*ctx);
                }
            }

            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|(_, _, a)| *a != action);

            for ctx in contexts {
                if ctx == Context::Search && key.types_text() {
                    // Printable keys always edit the query in search mode
                    warnings.push(format!(
                        "Key '{}' types text in search mode, keeping the search binding for '{}'",
                        key_str, action_name
                    ));
                    for (_, old_key) in previous.iter().filter(|(c, _)| *c == ctx) {
                        self.rebind(ctx, *old_key, action, &mut warnings);
                    }
                    continue;
                }
                self.rebind(ctx, key, action, &mut warnings);
            }

            tracing::info!(
                action = %action_name,
                key = %key_str,
                "Applied keybinding override"
            );
        }

        warnings
    }

    /// Look up the action for a given key in a given context.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        let key = KeySpec::new(code, modifiers).normalized();
        self.lookup.get(&(context, key)).copied()
    }

    /// All bindings for the help screen: (context, key label, description).
    pub fn all_bindings(&self) -> Vec<(Context, String, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), action.describe()))
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an action name string (from config) into an Action enum.
fn parse_action_name(name: &str) -> Option<Action> {
    match name.to_lowercase().as_str() {
        "quit" => Some(Action::Quit),
        "nav_down" | "navdown" | "down" => Some(Action::NavDown),
        "nav_up" | "navup" | "up" => Some(Action::NavUp),
        "next_category" | "nextcategory" => Some(Action::NextCategory),
        "prev_category" | "prevcategory" => Some(Action::PrevCategory),
        "enter_search" | "entersearch" | "search" => Some(Action::EnterSearch),
        "exit_search" | "exitsearch" => Some(Action::ExitSearch),
        "commit_search" | "commitsearch" => Some(Action::CommitSearch),
        "clear_search" | "clearsearch" => Some(Action::ClearSearch),
        "toggle_theme" | "toggletheme" | "theme" => Some(Action::ToggleTheme),
        "show_help" | "showhelp" | "help" => Some(Action::ShowHelp),
        "back" => Some(Action::Back),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
