use crate::components::imports::*;

/// User-chosen theme setting. `System` defers to the host scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::System
    }
}

/// The concrete scheme in effect after `System` is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ThemePreference {
    const STORAGE_KEY: &str = "theme";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn resolve(self, system: ResolvedTheme) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System => system,
        }
    }

    pub fn derived() -> Self {
        let remembered = || {
            use gloo_storage::{LocalStorage, Storage};
            LocalStorage::get::<String>(Self::STORAGE_KEY)
        };

        let remembered_default = || {
            let preference = Self::default();
            preference.remember();
            preference
        };

        match remembered() {
            Ok(preference) => match Self::try_from(preference.as_str()) {
                Ok(preference) => preference,
                Err(_) => remembered_default(),
            },
            Err(_) => remembered_default(),
        }
    }

    pub fn remember(&self) {
        use gloo_storage::{LocalStorage, Storage};
        match LocalStorage::set(Self::STORAGE_KEY, self.as_str()) {
            Ok(()) => {}
            Err(_) => console::log!("failed to store theme preference in local storage"),
        }
    }
}

impl TryFrom<&str> for ThemePreference {
    type Error = ();
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(()),
        }
    }
}

/// Current host appearance, from the `prefers-color-scheme` media query.
/// Defaults to light when the query is unavailable.
pub fn system_scheme() -> ResolvedTheme {
    let prefers_dark = web_sys::window()
        .and_then(|window| {
            window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
        })
        .map(|media_query| media_query.matches())
        .unwrap_or(false);

    if prefers_dark {
        ResolvedTheme::Dark
    } else {
        ResolvedTheme::Light
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub id: ResolvedTheme,
    pub bg_color: AttrValue,
    pub contrast_bg_color: AttrValue,
    pub text_color: AttrValue,
    pub link_color: AttrValue,
    pub box_border_color: AttrValue,
}

struct RawTheme<'a> {
    pub id: ResolvedTheme,
    pub bg_color: &'a str,
    pub contrast_bg_color: &'a str,
    pub text_color: &'a str,
    pub link_color: &'a str,
    pub box_border_color: &'a str,
}

impl<'a> RawTheme<'a> {
    pub fn light() -> Self {
        let dark = "#18181b";

        Self {
            id: ResolvedTheme::Light,
            bg_color: "#ffffff",
            contrast_bg_color: "#f4f4f5",
            text_color: dark,
            link_color: dark,
            box_border_color: "#d4d4d8",
        }
    }

    pub fn dark() -> Self {
        let light = "#fafafa";

        Self {
            id: ResolvedTheme::Dark,
            bg_color: "#09090b",
            contrast_bg_color: "#18181b",
            text_color: light,
            link_color: light,
            box_border_color: "#3f3f46",
        }
    }
}

impl<'a> From<RawTheme<'a>> for Theme {
    fn from(theme: RawTheme) -> Self {
        Theme {
            id: theme.id,
            bg_color: theme.bg_color.to_owned().into(),
            contrast_bg_color: theme.contrast_bg_color.to_owned().into(),
            text_color: theme.text_color.to_owned().into(),
            link_color: theme.link_color.to_owned().into(),
            box_border_color: theme.box_border_color.to_owned().into(),
        }
    }
}

impl From<ResolvedTheme> for Theme {
    fn from(value: ResolvedTheme) -> Self {
        match value {
            ResolvedTheme::Light => RawTheme::light(),
            ResolvedTheme::Dark => RawTheme::dark(),
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_round_trips_through_storage_form() {
        for preference in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(
                ThemePreference::try_from(preference.as_str()),
                Ok(preference)
            );
        }
    }

    #[test]
    fn unknown_storage_value_is_rejected() {
        assert_eq!(ThemePreference::try_from("pastel"), Err(()));
        assert_eq!(ThemePreference::try_from(""), Err(()));
    }

    #[test]
    fn default_preference_is_system() {
        assert_eq!(ThemePreference::default(), ThemePreference::System);
    }

    #[test]
    fn resolve_maps_system_to_host_scheme() {
        use ResolvedTheme::*;

        assert_eq!(ThemePreference::Light.resolve(Dark), Light);
        assert_eq!(ThemePreference::Dark.resolve(Light), Dark);
        assert_eq!(ThemePreference::System.resolve(Light), Light);
        assert_eq!(ThemePreference::System.resolve(Dark), Dark);
    }

    #[test]
    fn palette_follows_resolved_theme() {
        let light = Theme::from(ResolvedTheme::Light);
        let dark = Theme::from(ResolvedTheme::Dark);

        assert_eq!(light.id, ResolvedTheme::Light);
        assert_eq!(dark.id, ResolvedTheme::Dark);
        assert_ne!(light.bg_color, dark.bg_color);
    }
}
