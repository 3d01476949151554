use crate::animation::FadeIn;
use crate::catalog::{derive_categories, Catalog, Topic};
use crate::keybindings::KeybindingRegistry;
use crate::search::{filter, normalize_query};
use crate::theme::{ThemeTokens, ThemeVariant};
use ratatui::layout::{Position, Rect};
use std::borrow::Cow;
use std::time::{Duration, Instant};

/// Maximum search query length, in characters.
pub const MAX_SEARCH_LENGTH: usize = 256;

/// How long a status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(3);

// ============================================================================
// Mode and Options
// ============================================================================

/// Input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Keys are commands.
    Browse,
    /// Printable keys edit the search query.
    Search,
}

/// Startup options resolved from CLI and config.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub theme: ThemeVariant,
    pub animations: bool,
    pub stagger: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            animations: true,
            stagger: crate::animation::DEFAULT_STAGGER,
        }
    }
}

// ============================================================================
// Hit Regions
// ============================================================================

/// Screen areas of interactive elements from the last frame.
///
/// Written by the renderer, read by mouse handling.
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    pub search_bar: Option<Rect>,
    pub theme_toggle: Option<Rect>,
    /// (area, index into the category list)
    pub chips: Vec<(Rect, usize)>,
    /// (area, index into the visible topic list)
    pub cards: Vec<(Rect, usize)>,
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    SearchBar,
    ThemeToggle,
    Chip(usize),
    Card(usize),
    Nothing,
}

impl HitRegions {
    pub fn clear(&mut self) {
        self.search_bar = None;
        self.theme_toggle = None;
        self.chips.clear();
        self.cards.clear();
    }

    pub fn target_at(&self, column: u16, row: u16) -> ClickTarget {
        let pos = Position::new(column, row);
        if self.theme_toggle.is_some_and(|r| r.contains(pos)) {
            return ClickTarget::ThemeToggle;
        }
        if self.search_bar.is_some_and(|r| r.contains(pos)) {
            return ClickTarget::SearchBar;
        }
        if let Some((_, idx)) = self.chips.iter().find(|(r, _)| r.contains(pos)) {
            return ClickTarget::Chip(*idx);
        }
        if let Some((_, idx)) = self.cards.iter().find(|(r, _)| r.contains(pos)) {
            return ClickTarget::Card(*idx);
        }
        ClickTarget::Nothing
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state.
///
/// Owns the immutable catalog and the mutable UI state. The visible topic
/// list is never stored: it is recomputed from the catalog, query and
/// category whenever it is needed.
pub struct App {
    catalog: Catalog,
    /// "All" followed by the catalog's categories; derived once since the
    /// catalog never changes.
    categories: Vec<String>,

    // UI state
    search_query: String,
    /// Index into `categories`, so the selection is always a valid category.
    selected_category: usize,
    theme_variant: ThemeVariant,
    theme: ThemeTokens,

    pub keybindings: KeybindingRegistry,
    pub mode: Mode,

    /// Keyboard cursor over the visible list.
    pub cursor: usize,
    /// Card under the mouse pointer, if any.
    pub hovered: Option<usize>,
    /// First visible card row; kept by the renderer so the cursor stays on screen.
    pub card_scroll: usize,

    pub show_help: bool,
    pub help_scroll_offset: usize,

    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Dirty flag to skip unnecessary frame renders
    pub needs_redraw: bool,

    /// Card reveal clock, restarted whenever the visible list changes.
    pub fade: FadeIn,
    /// App start, drives the rainbow border.
    pub started: Instant,
    /// Rainbow stop used by the last frame.
    pub rainbow_stop: usize,

    pub hit_regions: HitRegions,
}

impl App {
    pub fn new(catalog: Catalog, options: AppOptions) -> Self {
        let categories = derive_categories(catalog.topics());
        Self {
            catalog,
            categories,
            search_query: String::new(),
            selected_category: 0,
            theme_variant: options.theme,
            theme: options.theme.tokens(),
            keybindings: KeybindingRegistry::new(),
            mode: Mode::Browse,
            cursor: 0,
            hovered: None,
            card_scroll: 0,
            show_help: false,
            help_scroll_offset: 0,
            status_message: None,
            needs_redraw: true,
            fade: FadeIn::new(options.animations, options.stagger),
            started: Instant::now(),
            rainbow_stop: 0,
            hit_regions: HitRegions::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ========================================================================
    // Derived data
    // ========================================================================

    /// Category list shown as chips; always starts with "All".
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn selected_category_index(&self) -> usize {
        self.selected_category
    }

    pub fn selected_category(&self) -> &str {
        &self.categories[self.selected_category]
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Query as used for matching and highlighting.
    pub fn effective_query(&self) -> &str {
        normalize_query(&self.search_query)
    }

    /// Topics matching the current query and category, in catalog order.
    pub fn visible_topics(&self) -> Vec<&Topic> {
        filter(
            self.catalog.topics(),
            &self.search_query,
            self.selected_category(),
        )
    }

    /// Topic under the keyboard cursor.
    pub fn selected_topic(&self) -> Option<&Topic> {
        self.visible_topics().get(self.cursor).copied()
    }

    /// Card drawn raised: the hovered one, else the keyboard cursor.
    pub fn raised_index(&self) -> Option<usize> {
        let len = self.visible_topics().len();
        match self.hovered {
            Some(idx) if idx < len => Some(idx),
            _ if len > 0 => Some(self.cursor.min(len - 1)),
            _ => None,
        }
    }

    // ========================================================================
    // Theme
    // ========================================================================

    pub fn theme(&self) -> &ThemeTokens {
        &self.theme
    }

    pub fn theme_variant(&self) -> ThemeVariant {
        self.theme_variant
    }

    pub fn is_dark(&self) -> bool {
        self.theme_variant.is_dark()
    }

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = variant.tokens();
        self.needs_redraw = true;
    }

    /// Flip light/dark. Returns the new theme name for status display.
    pub fn toggle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.toggle();
        self.set_theme(next);
        tracing::debug!(theme = next.name(), "Theme toggled");
        next.name()
    }

    // ========================================================================
    // Category selection
    // ========================================================================

    /// Select a category by index into `categories()`. Out-of-range indices
    /// are ignored.
    pub fn select_category(&mut self, idx: usize) {
        if idx >= self.categories.len() || idx == self.selected_category {
            return;
        }
        self.selected_category = idx;
        tracing::debug!(category = %self.categories[idx], "Category selected");
        self.on_results_changed();
    }

    /// Select a category by name. Returns false for unknown names.
    pub fn select_category_by_name(&mut self, name: &str) -> bool {
        match self.categories.iter().position(|c| c == name) {
            Some(idx) => {
                self.select_category(idx);
                true
            }
            None => false,
        }
    }

    pub fn next_category(&mut self) {
        let next = (self.selected_category + 1) % self.categories.len();
        self.select_category(next);
    }

    pub fn prev_category(&mut self) {
        let len = self.categories.len();
        let prev = (self.selected_category + len - 1) % len;
        self.select_category(prev);
    }

    // ========================================================================
    // Search editing
    // ========================================================================

    pub fn enter_search(&mut self) {
        self.mode = Mode::Search;
    }

    /// Leave search mode keeping the query.
    pub fn commit_search(&mut self) {
        self.mode = Mode::Browse;
    }

    /// Leave search mode and drop the query.
    pub fn exit_search(&mut self) {
        self.mode = Mode::Browse;
        self.clear_search();
    }

    pub fn push_char(&mut self, c: char) {
        if self.search_query.chars().count() >= MAX_SEARCH_LENGTH {
            self.set_status(format!(
                "Search query too long (max {} chars)",
                MAX_SEARCH_LENGTH
            ));
            return;
        }
        self.search_query.push(c);
        self.on_results_changed();
    }

    pub fn pop_char(&mut self) {
        if self.search_query.pop().is_some() {
            self.on_results_changed();
        }
    }

    pub fn clear_search(&mut self) {
        if !self.search_query.is_empty() {
            self.search_query.clear();
            self.on_results_changed();
        }
    }

    /// Replace the whole query (used by `--query`).
    pub fn set_query(&mut self, query: &str) {
        self.search_query = query.chars().take(MAX_SEARCH_LENGTH).collect();
        self.on_results_changed();
    }

    /// Esc in browse mode: clear the query first, then reset the category.
    ///
    /// Returns false when there was nothing to reset.
    pub fn back(&mut self) -> bool {
        if !self.search_query.is_empty() {
            self.clear_search();
            true
        } else if self.selected_category != 0 {
            self.select_category(0);
            true
        } else {
            false
        }
    }

    fn on_results_changed(&mut self) {
        self.cursor = 0;
        self.hovered = None;
        self.card_scroll = 0;
        self.fade.restart();
        self.needs_redraw = true;
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn nav_up(&mut self) {
        self.hovered = None;
        self.cursor = self.cursor.saturating_sub(1);
        self.clamp_cursor();
    }

    pub fn nav_down(&mut self) {
        self.hovered = None;
        self.cursor = self.cursor.saturating_add(1);
        self.clamp_cursor();
    }

    /// Keep the cursor inside the visible list.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_topics().len();
        self.cursor = if len == 0 {
            0
        } else {
            self.cursor.min(len - 1)
        };
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    /// Track the card under the pointer. Returns true when it changed.
    pub fn hover_at(&mut self, column: u16, row: u16) -> bool {
        let hovered = match self.hit_regions.target_at(column, row) {
            ClickTarget::Card(idx) => Some(idx),
            _ => None,
        };
        if hovered != self.hovered {
            self.hovered = hovered;
            return true;
        }
        false
    }

    /// Dispatch a click. Returns what was hit.
    pub fn click_at(&mut self, column: u16, row: u16) -> ClickTarget {
        let target = self.hit_regions.target_at(column, row);
        match target {
            ClickTarget::SearchBar => self.enter_search(),
            ClickTarget::ThemeToggle => {
                let name = self.toggle_theme();
                self.set_status(format!("Theme: {}", name));
            }
            ClickTarget::Chip(idx) => self.select_category(idx),
            ClickTarget::Card(idx) => {
                self.cursor = idx;
                self.clamp_cursor();
            }
            ClickTarget::Nothing => {}
        }
        target
    }

    // ========================================================================
    // Status / animation
    // ========================================================================

    /// Set status message (will auto-expire after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired. Returns true if a message was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed() >= STATUS_TTL {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    /// Whether the next tick needs a redraw for animation.
    pub fn animation_pending(&self) -> bool {
        if !self.fade.is_enabled() {
            return false;
        }
        let stop = crate::theme::rainbow_index(self.started.elapsed());
        stop != self.rainbow_stop || self.fade.is_animating(self.visible_topics().len())
    }
}

// ============================================================================
// Tests
// ============================================================================
