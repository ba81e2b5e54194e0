use std::rc::Rc;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::storage::{load_json, save_json, BrowserStorage, KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Accent colours, persisted as `{ "primary": .., "accent": .. }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub accent: String,
}

impl Default for Palette {
    fn default() -> Self {
        PRESETS[0].palette()
    }
}

impl Palette {
    pub fn is_valid(&self) -> bool {
        is_hex_color(&self.primary) && is_hex_color(&self.accent)
    }
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PalettePreset {
    pub name: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
}

impl PalettePreset {
    pub fn palette(&self) -> Palette {
        Palette {
            primary: self.primary.to_string(),
            accent: self.accent.to_string(),
        }
    }
}

pub const PRESETS: &[PalettePreset] = &[
    PalettePreset { name: "Blue (Default)", primary: "#3b82f6", accent: "#8b5cf6" },
    PalettePreset { name: "Green", primary: "#10b981", accent: "#6366f1" },
    PalettePreset { name: "Purple", primary: "#8b5cf6", accent: "#ec4899" },
    PalettePreset { name: "Orange", primary: "#f97316", accent: "#8b5cf6" },
    PalettePreset { name: "Pink", primary: "#ec4899", accent: "#3b82f6" },
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub palette: Palette,
}

pub enum ThemeAction {
    ToggleMode,
    ApplyPalette(Palette),
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::ToggleMode => Rc::new(ThemeState {
                mode: self.mode.toggled(),
                palette: self.palette.clone(),
            }),
            ThemeAction::ApplyPalette(palette) if palette.is_valid() => Rc::new(ThemeState {
                mode: self.mode,
                palette,
            }),
            ThemeAction::ApplyPalette(palette) => {
                warn!("Rejecting palette with invalid colours: {:?}", palette);
                self
            }
        }
    }
}

impl ThemeState {
    /// Restores the saved theme, falling back to defaults for anything
    /// missing or unreadable.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let mode = store
            .get(config::MODE_STORAGE_KEY)
            .and_then(|raw| ThemeMode::parse(&raw))
            .unwrap_or_default();
        let palette = load_json::<Palette>(store, config::PALETTE_STORAGE_KEY)
            .filter(Palette::is_valid)
            .unwrap_or_default();
        Self { mode, palette }
    }

    /// Writes only the keys that differ from `previous`. A mode toggle
    /// leaves the saved palette alone and a preset pick leaves the mode.
    pub fn save_changes(&self, previous: &ThemeState, store: &impl KeyValueStore) -> Result<(), StorageError> {
        if self.mode != previous.mode {
            store.set(config::MODE_STORAGE_KEY, self.mode.as_str())?;
        }
        if self.palette != previous.palette {
            save_json(store, config::PALETTE_STORAGE_KEY, &self.palette)?;
        }
        Ok(())
    }

    pub fn css_variables(&self) -> [(&'static str, &str); 2] {
        [
            ("--primary", self.palette.primary.as_str()),
            ("--accent", self.palette.accent.as_str()),
        ]
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }
}

fn apply_to_document(theme: &ThemeState) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        warn!("No document element to theme");
        return;
    };

    let style = root.style();
    for (name, value) in theme.css_variables() {
        if style.set_property(name, value).is_err() {
            warn!("Failed to set {}", name);
        }
    }
    let classes = root.class_list();
    for (class, on) in [("dark", theme.is_dark()), ("light", !theme.is_dark())] {
        if classes.toggle_with_force(class, on).is_err() {
            warn!("Failed to toggle {} class", class);
        }
    }
}

pub type ThemeContext = UseReducerHandle<ThemeState>;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

/// Owns the theme. This is the only place that writes theme CSS variables
/// and the only place that persists them.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_reducer_eq(|| ThemeState::load(&BrowserStorage));
    // starts as the restored theme, which storage already holds
    let persisted = use_mut_ref(|| (*theme).clone());

    {
        let persisted = persisted.clone();
        use_effect_with_deps(
            move |theme: &ThemeState| {
                apply_to_document(theme);
                let previous = persisted.replace(theme.clone());
                if previous != *theme {
                    match theme.save_changes(&previous, &BrowserStorage) {
                        Ok(()) => info!("Saved theme {} {:?}", theme.mode.as_str(), theme.palette),
                        Err(e) => warn!("Theme not persisted: {}", e),
                    }
                }
                || ()
            },
            (*theme).clone(),
        );
    }

    html! {
        <ContextProvider<ThemeContext> context={theme}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme called outside ThemeProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_storage_gives_defaults() {
        let theme = ThemeState::load(&MemoryStore::default());
        assert_eq!(theme.mode, ThemeMode::Dark);
        assert_eq!(theme.palette.primary, "#3b82f6");
        assert_eq!(theme.palette.accent, "#8b5cf6");
    }

    #[test]
    fn save_then_load_restores_theme() {
        let store = MemoryStore::default();
        let theme = ThemeState {
            mode: ThemeMode::Light,
            palette: PRESETS[3].palette(),
        };
        theme.save_changes(&ThemeState::default(), &store).unwrap();

        assert_eq!(
            store.get(config::PALETTE_STORAGE_KEY).as_deref(),
            Some(r##"{"primary":"#f97316","accent":"#8b5cf6"}"##)
        );
        assert_eq!(store.get(config::MODE_STORAGE_KEY).as_deref(), Some("light"));
        assert_eq!(ThemeState::load(&store), theme);
    }

    #[test]
    fn toggling_mode_leaves_saved_palette_alone() {
        let store = MemoryStore::default();
        let before = ThemeState::default();
        let after = Rc::new(before.clone()).reduce(ThemeAction::ToggleMode);
        after.save_changes(&before, &store).unwrap();

        assert_eq!(store.get(config::MODE_STORAGE_KEY).as_deref(), Some("light"));
        assert_eq!(store.get(config::PALETTE_STORAGE_KEY), None);
    }

    #[test]
    fn picking_a_preset_leaves_saved_mode_alone() {
        let store = MemoryStore::default();
        let before = ThemeState::default();
        let after = Rc::new(before.clone()).reduce(ThemeAction::ApplyPalette(PRESETS[1].palette()));
        after.save_changes(&before, &store).unwrap();

        assert_eq!(store.get(config::MODE_STORAGE_KEY), None);
        assert!(store.get(config::PALETTE_STORAGE_KEY).is_some());
    }

    #[test]
    fn corrupt_values_fall_back() {
        let store = MemoryStore::default();
        store.set(config::PALETTE_STORAGE_KEY, "{not json").unwrap();
        store.set(config::MODE_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(ThemeState::load(&store), ThemeState::default());

        store
            .set(config::PALETTE_STORAGE_KEY, r##"{"primary":"red","accent":"#fff"}"##)
            .unwrap();
        assert_eq!(ThemeState::load(&store).palette, Palette::default());
    }

    #[test]
    fn reducer_toggles_and_applies() {
        let state = Rc::new(ThemeState::default());
        let state = state.reduce(ThemeAction::ToggleMode);
        assert_eq!(state.mode, ThemeMode::Light);

        let state = state.reduce(ThemeAction::ApplyPalette(PRESETS[1].palette()));
        assert_eq!(state.palette.primary, "#10b981");
        assert_eq!(state.mode, ThemeMode::Light);

        let bogus = Palette { primary: "blue".into(), accent: "#123".into() };
        let state = state.reduce(ThemeAction::ApplyPalette(bogus));
        assert_eq!(state.palette.primary, "#10b981");
    }

    #[test]
    fn every_preset_is_valid() {
        assert!(PRESETS.iter().all(|p| p.palette().is_valid()));
        assert_eq!(ThemeState::default().css_variables()[0], ("--primary", "#3b82f6"));
    }
}
