use crate::components::imports::*;
use crate::components::{ThemeCtx, ThemeCtxSub, ThemeToggle};

pub struct Header {
    theme_ctx: ThemeCtxSub,
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
}

impl Component for Header {
    type Message = Msg;
    type Properties = Props;

    #[allow(unused_variables)]
    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                console::log!("WithTheme context updated from Header");
                self.theme_ctx.set(theme_ctx);
                true
            }
        }
    }

    #[allow(unused_variables)]
    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme = &self.theme_ctx.as_ref().theme;

        let bg_color = &theme.bg_color;
        let box_border_color = &theme.box_border_color;

        let wrapper_style = css!(
            "
                display: flex;
                align-items: center;
                justify-content: space-between;
                height: 3.5em;
                padding: 0 1em;
                background-color: ${bg_color};
                border-bottom: 1px solid ${box_border_color};
            ",
            bg_color = bg_color,
            box_border_color = box_border_color,
        );

        let brand_style = css!(
            "
                font-size: 120%;
                font-weight: bold;
            "
        );

        html! {
            <div class={ wrapper_style }>
                <div class={ brand_style }>
                    <Link<Route> to={Route::Home}>{ "Softex AI" }</Link<Route>>
                </div>
                <ThemeToggle/>
            </div>
        }
    }
}
