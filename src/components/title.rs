use crate::components::imports::*;

// evaluation order is top to down,
// so set the title only from top-level page components
pub struct PageTitle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

impl Component for PageTitle {
    type Message = ();
    type Properties = Props;

    #[allow(unused_variables)]
    fn create(ctx: &Context<Self>) -> Self {
        Self
    }

    #[allow(unused_variables)]
    fn view(&self, ctx: &Context<Self>) -> Html {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        document.set_title(&ctx.props().title);
        html! {}
    }
}
