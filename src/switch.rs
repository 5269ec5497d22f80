use crate::router::Route;

use stylist::css;
use yew::prelude::*;

pub fn switch(routes: Route) -> Html {
    use crate::components::*;

    match routes {
        Route::Home => html! { <Home/> },
        Route::Users => html! { <UsersPage/> },
        Route::NotFound => {
            html! { <h1 class={css!("text-align: center; color: #ff5050;")}>{ "not found 404" }</h1> }
        }
    }
}
