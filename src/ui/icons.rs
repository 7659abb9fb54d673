use crate::config::{ICONS, remote_icon_url};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSource {
    Remote,
    Fallback,
}

/// Icon shown next to a currency picker.
///
/// Starts on the remote token icon for the current code. A failed load
/// switches to the bundled placeholder once; after that, failures are
/// ignored so a broken placeholder can never loop. Picking a different code
/// re-arms the fallback.
#[derive(Debug, Clone)]
pub struct CurrencyIcon {
    code: String,
    source: IconSource,
    fallback_armed: bool,
    offline: bool,
}

impl CurrencyIcon {
    /// `offline` icons never touch the network and always show the placeholder.
    pub fn new(offline: bool) -> Self {
        Self {
            code: String::new(),
            source: Self::initial_source(offline),
            fallback_armed: !offline,
            offline,
        }
    }

    fn initial_source(offline: bool) -> IconSource {
        if offline {
            IconSource::Fallback
        } else {
            IconSource::Remote
        }
    }

    pub fn set_code(&mut self, code: &str) {
        if self.code == code {
            return;
        }
        self.code = code.to_string();
        self.source = Self::initial_source(self.offline);
        self.fallback_armed = !self.offline;
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn source(&self) -> IconSource {
        self.source
    }

    pub fn uri(&self) -> String {
        match self.source {
            IconSource::Remote => remote_icon_url(&self.code),
            IconSource::Fallback => ICONS.fallback_uri.to_string(),
        }
    }

    /// Records a load failure. Returns true when the icon switched to the placeholder.
    pub fn on_load_failed(&mut self) -> bool {
        if self.source == IconSource::Remote && self.fallback_armed {
            self.source = IconSource::Fallback;
            self.fallback_armed = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_uri_is_keyed_by_code() {
        let mut icon = CurrencyIcon::new(false);
        icon.set_code("ETH");
        assert_eq!(
            icon.uri(),
            "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/ETH.svg"
        );
    }

    #[test]
    fn falls_back_exactly_once() {
        let mut icon = CurrencyIcon::new(false);
        icon.set_code("ETH");

        assert!(icon.on_load_failed());
        assert_eq!(icon.source(), IconSource::Fallback);
        assert_eq!(icon.uri(), ICONS.fallback_uri);

        // The placeholder failing as well must not trigger another switch
        assert!(!icon.on_load_failed());
        assert_eq!(icon.source(), IconSource::Fallback);
    }

    #[test]
    fn new_code_rearms_fallback() {
        let mut icon = CurrencyIcon::new(false);
        icon.set_code("ETH");
        icon.on_load_failed();

        icon.set_code("ETH");
        assert_eq!(icon.source(), IconSource::Fallback);

        icon.set_code("ATOM");
        assert_eq!(icon.source(), IconSource::Remote);
        assert!(icon.on_load_failed());
    }

    #[test]
    fn offline_icons_use_placeholder() {
        let mut icon = CurrencyIcon::new(true);
        icon.set_code("ETH");
        assert_eq!(icon.source(), IconSource::Fallback);
        assert!(!icon.on_load_failed());
    }
}
