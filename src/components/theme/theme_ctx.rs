use super::themes::{system_scheme, ResolvedTheme, Theme, ThemePreference};
use crate::components::imports::*;

use gloo_events::EventListener;

pub mod imports {
    pub use super::{ThemeCtx, ThemeCtxSub, ThemeStore, WithTheme};
}

/// Snapshot of the theme state, provided through context.
///
/// Subscribers read `preference`/`resolved`/`theme` and write back only
/// through the set callback owned by [`WithTheme`].
#[derive(derivative::Derivative)]
#[derivative(Clone, Debug, PartialEq)]
pub struct ThemeStore {
    pub preference: ThemePreference,
    pub resolved: ResolvedTheme,
    pub theme: Theme,

    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    set_cb: Callback<ThemePreference>,
}

impl ThemeStore {
    pub fn set(&self, preference: ThemePreference) {
        self.set_cb.emit(preference);
    }

    #[cfg(test)]
    pub fn with_set_cb(
        preference: ThemePreference,
        resolved: ResolvedTheme,
        set_cb: Callback<ThemePreference>,
    ) -> Self {
        Self {
            preference,
            resolved,
            theme: Theme::from(resolved),
            set_cb,
        }
    }
}

pub type ThemeCtx = Rc<ThemeStore>;

pub struct ThemeCtxSub {
    ctx: ThemeCtx,
    // keep handle for component rerender after the store changes
    _ctx_handle: ContextHandle<ThemeCtx>,
}

impl AsRef<ThemeStore> for ThemeCtxSub {
    fn as_ref(&self) -> &ThemeStore {
        &self.ctx
    }
}

impl ThemeCtxSub {
    pub fn subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Self
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(ThemeCtx) -> M + 'static,
    {
        let (ctx, _ctx_handle) = ctx
            .link()
            .context(ctx.link().callback(f))
            .expect("ThemeStore context to exist");

        Self { ctx, _ctx_handle }
    }

    pub fn set(&mut self, ctx: ThemeCtx) {
        self.ctx = ctx;
    }

    pub fn set_theme<COMP: Component>(&mut self, preference: ThemePreference) {
        console::log!(format!(
            "{} sets theme preference {:?}",
            std::any::type_name::<COMP>(),
            preference
        ));
        self.ctx.set(preference);
    }
}

/// Owns the theme preference and provides [`ThemeCtx`] to children.
pub struct WithTheme {
    preference: ThemePreference,
    // keep listener alive to follow host scheme changes under `System`
    _scheme_listener: Option<EventListener>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    SetTheme(ThemePreference),
    SystemSchemeChanged,
}

impl Component for WithTheme {
    type Message = Msg;
    type Properties = Props;

    #[allow(unused_variables)]
    fn create(ctx: &Context<Self>) -> Self {
        Self {
            preference: ThemePreference::derived(),
            _scheme_listener: None,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let resolved = self.preference.resolve(system_scheme());

        let store = ThemeStore {
            preference: self.preference,
            resolved,
            theme: Theme::from(resolved),
            set_cb: ctx.link().callback(Msg::SetTheme),
        };

        html! {
            <ContextProvider<ThemeCtx> context={Rc::new(store)}>
                { ctx.props().children.clone() }
            </ContextProvider<ThemeCtx>>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();

            let media_query = web_sys::window().and_then(|window| {
                window
                    .match_media("(prefers-color-scheme: dark)")
                    .ok()
                    .flatten()
            });

            if let Some(media_query) = media_query {
                self._scheme_listener = Some(EventListener::new(&media_query, "change", move |_| {
                    link.send_message(Msg::SystemSchemeChanged)
                }));
            }
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::SetTheme(preference) => {
                preference.remember();
                self.preference = preference;
                true
            }
            // only affects the resolved theme while preference is System
            Self::Message::SystemSchemeChanged => self.preference == ThemePreference::System,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn store_set_emits_preference_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));

        let set_cb = {
            let seen = seen.clone();
            Callback::from(move |preference| seen.borrow_mut().push(preference))
        };

        let store = ThemeStore::with_set_cb(
            ThemePreference::System,
            ResolvedTheme::Dark,
            set_cb,
        );

        store.set(ThemePreference::Dark);

        assert_eq!(*seen.borrow(), vec![ThemePreference::Dark]);
    }
}
