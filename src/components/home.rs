use crate::components::imports::*;
use crate::components::PageTitle;

#[styled_component]
pub fn Home() -> Html {
    let wrapper_style = css!(
        "
            display: flex;
            flex-direction: column;
            align-items: center;
            margin-top: 4em;
        "
    );

    html! {
        <>
            <PageTitle title={"Softex AI"}/>

            <div class={wrapper_style}>
                <h1>{ "Softex AI" }</h1>
                <Link<Route> to={Route::Users}>{ "Users" }</Link<Route>>
            </div>
        </>
    }
}
