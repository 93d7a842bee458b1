//! I18nState - Current UI language

use crate::i18n::Locale;

#[derive(Debug, Clone, Default)]
pub struct I18nState {
    pub locale: Locale,
}

impl I18nState {
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Switch between English and Chinese
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_locale() {
        let mut state = I18nState::default();
        assert_eq!(state.locale, Locale::EnUS);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::ZhCN);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::EnUS);
    }
}
