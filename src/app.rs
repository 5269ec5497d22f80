use crate::router::Route;
use crate::switch::switch;

use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Switch};

#[function_component(App)]
pub fn app() -> Html {
    use crate::components::theme::theme_ctx::WithTheme;
    use crate::components::{DefaultStyling, Header};

    html! {
        <WithTheme>
            <DefaultStyling>
                <BrowserRouter>
                    <Header/>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </DefaultStyling>
        </WithTheme>
    }
}
