use super::theme_ctx::imports::*;
use super::themes::{ResolvedTheme, ThemePreference};
use crate::components::imports::*;

/// One-shot readiness guard for the toggle. The control renders nothing
/// until the first render pass has completed, so the initial static markup
/// never disagrees with the environment-dependent interactive markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mount {
    NotReady,
    Ready,
}

impl Mount {
    pub fn advance(self) -> Self {
        Self::Ready
    }
}

pub struct MenuEntry {
    pub key: ThemePreference,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static MENU_ENTRIES: [MenuEntry; 3] = [
    MenuEntry {
        key: ThemePreference::Light,
        label: "Light",
        icon: "☀",
    },
    MenuEntry {
        key: ThemePreference::Dark,
        label: "Dark",
        icon: "☾",
    },
    MenuEntry {
        key: ThemePreference::System,
        label: "System",
        icon: "🖥",
    },
];

/// The single entry marked active in the menu.
///
/// An exact preference match takes precedence over a resolved-theme match,
/// so `System` stays marked while it is the stored preference even though
/// the resolved light/dark entry would also match the second rule.
pub fn active_entry(preference: ThemePreference, resolved: ResolvedTheme) -> ThemePreference {
    let keys = || MENU_ENTRIES.iter().map(|entry| entry.key);

    let exact = keys().find(|key| *key == preference);

    let by_resolved = || {
        keys().find(|key| match key {
            ThemePreference::Light => resolved == ResolvedTheme::Light,
            ThemePreference::Dark => resolved == ResolvedTheme::Dark,
            ThemePreference::System => false,
        })
    };

    exact.or_else(by_resolved).unwrap_or(preference)
}

pub struct ThemeToggle {
    theme_ctx: ThemeCtxSub,
    mount: Mount,
    open: bool,
}

pub enum ThemeToggleMsg {
    ThemeContextUpdate(ThemeCtx),
    Mounted,
    ToggleMenu,
    Select(ThemePreference),
}

impl Component for ThemeToggle {
    type Message = ThemeToggleMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
            mount: Mount::NotReady,
            open: false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.mount {
            Mount::NotReady => html! {},
            Mount::Ready => self.view_ready(ctx),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Self::Message::Mounted);
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                self.theme_ctx.set(theme_ctx);
                true
            }
            Self::Message::Mounted => {
                self.mount = self.mount.advance();
                true
            }
            Self::Message::ToggleMenu => {
                self.open = !self.open;
                true
            }
            Self::Message::Select(preference) => {
                self.theme_ctx.set_theme::<Self>(preference);
                self.open = false;
                true
            }
        }
    }
}

impl ThemeToggle {
    fn view_ready(&self, ctx: &Context<Self>) -> Html {
        let store = self.theme_ctx.as_ref();
        let theme = &store.theme;

        let active = active_entry(store.preference, store.resolved);

        let trigger_icon = match store.resolved {
            ResolvedTheme::Light => "☀",
            ResolvedTheme::Dark => "☾",
        };

        let wrapper_style = css!("position: relative; display: inline-block;");

        let box_border_color = &theme.box_border_color;
        let text_color = &theme.text_color;
        let trigger_style = css!(
            "
                user-select: none;
                height: 2em; width: 2em;
                display: flex; align-items: center; justify-content: center;
                border: 1px solid ${box_border_color};
                border-radius: 5px;
                color: ${text_color};
                cursor: pointer;
                transition: opacity .2s ease-in;

                :hover {
                    opacity: 0.8;
                }
            ",
            box_border_color = box_border_color,
            text_color = text_color,
        );

        let onclick = ctx.link().callback(|_| <Self as Component>::Message::ToggleMenu);

        let menu = match self.open {
            false => html! {},
            true => {
                let contrast_bg_color = &theme.contrast_bg_color;
                let menu_style = css!(
                    "
                        position: absolute; right: 0; top: 2.5em;
                        min-width: 9em;
                        padding: 4px;
                        border: 1px solid ${box_border_color};
                        border-radius: 5px;
                        background-color: ${contrast_bg_color};
                    ",
                    box_border_color = box_border_color,
                    contrast_bg_color = contrast_bg_color,
                );

                let entry_style = css!(
                    "
                        display: flex; align-items: center; gap: 8px;
                        padding: 5px 8px;
                        border-radius: 3px;
                        cursor: pointer;
                        user-select: none;

                        :hover {
                            opacity: 0.8;
                        }
                    "
                );
                let active_entry_style = css!("font-weight: bold;");

                let entries = MENU_ENTRIES
                    .iter()
                    .map(|entry| {
                        let key = entry.key;
                        let onclick = ctx.link().callback(move |_| <Self as Component>::Message::Select(key));

                        let mut classes = classes!(entry_style.clone());
                        if key == active {
                            classes.push(active_entry_style.clone());
                        }

                        let check = match key == active {
                            true => html! { <span>{ "✓" }</span> },
                            false => html! {},
                        };

                        html! {
                            <div key={entry.label} {onclick} class={classes}>
                                <span>{ entry.icon }</span>
                                <span>{ entry.label }</span>
                                { check }
                            </div>
                        }
                    })
                    .collect::<Html>();

                html! { <div class={menu_style}>{ entries }</div> }
            }
        };

        html! {
            <div class={wrapper_style}>
                <div {onclick} class={trigger_style}>{ trigger_icon }</div>
                { menu }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_light_dark_system_in_order() {
        let keys = MENU_ENTRIES.iter().map(|entry| entry.key).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                ThemePreference::Light,
                ThemePreference::Dark,
                ThemePreference::System,
            ]
        );
    }

    #[test]
    fn exactly_one_entry_is_active_for_every_preference() {
        for preference in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            for system in [ResolvedTheme::Light, ResolvedTheme::Dark] {
                let resolved = preference.resolve(system);
                let active = active_entry(preference, resolved);

                let marked = MENU_ENTRIES
                    .iter()
                    .filter(|entry| entry.key == active)
                    .count();
                assert_eq!(marked, 1);
            }
        }
    }

    #[test]
    fn exact_preference_match_wins() {
        use ResolvedTheme::*;

        assert_eq!(
            active_entry(ThemePreference::Light, Light),
            ThemePreference::Light
        );
        assert_eq!(
            active_entry(ThemePreference::Dark, Dark),
            ThemePreference::Dark
        );
    }

    #[test]
    fn system_preference_marks_system_not_resolved_entry() {
        assert_eq!(
            active_entry(ThemePreference::System, ResolvedTheme::Dark),
            ThemePreference::System
        );
        assert_eq!(
            active_entry(ThemePreference::System, ResolvedTheme::Light),
            ThemePreference::System
        );
    }

    #[test]
    fn mount_guard_only_advances_to_ready() {
        assert_eq!(Mount::NotReady.advance(), Mount::Ready);
        assert_eq!(Mount::Ready.advance(), Mount::Ready);
    }
}
