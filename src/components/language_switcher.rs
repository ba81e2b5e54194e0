use log::warn;
use web_sys::window;
use yew::prelude::*;

use crate::toast::use_toast;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ms,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ms => "ms",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ms => "Bahasa Melayu",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇺🇸",
            Language::Ms => "🇲🇾",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ms,
            Language::Ms => Language::En,
        }
    }
}

fn set_document_lang(language: Language) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if root.set_attribute("lang", language.code()).is_err() {
                warn!("Could not set document language to {}", language.code());
            }
        }
        None => warn!("No document element for language switch"),
    }
}

/// Only the document language changes; content is not translated.
#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let language = use_state(Language::default);
    let toaster = use_toast();

    let onclick = {
        let language = language.clone();
        Callback::from(move |_: MouseEvent| {
            let next = language.toggled();
            set_document_lang(next);
            toaster.info("Language Changed", format!("Switched to {}", next.name()));
            language.set(next);
        })
    };

    html! {
        <button
            class="btn btn-outline btn-sm lang-switch"
            {onclick}
            aria-label={format!("Change language to {}", language.toggled().name())}
        >
            <span aria-hidden="true">{ language.flag() }</span>
            <span class="lang-code">{ language.code().to_uppercase() }</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_between_english_and_malay() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::En.toggled(), Language::Ms);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
        assert_eq!(Language::Ms.code(), "ms");
    }
}
