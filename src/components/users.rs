use crate::components::imports::*;
use crate::components::{PageTitle, ThemeCtx, ThemeCtxSub};
use crate::interfacing::UserRow;
use crate::supabase::{self, SelectError};

pub struct UsersPage {
    users: Vec<UserRow>,
    theme_ctx: ThemeCtxSub,
}

pub enum Msg {
    UsersLoaded(Vec<UserRow>),
    FetchFailed(SelectError),
    ThemeContextUpdate(ThemeCtx),
}

impl Component for UsersPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            users: Vec::new(),
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    #[allow(unused_variables)]
    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme = &self.theme_ctx.as_ref().theme;

        let contrast_bg_color = &theme.contrast_bg_color;
        let box_border_color = &theme.box_border_color;

        let wrapper_style = css!(
            "
                display: flex;
                flex-direction: column;
                align-items: center;
            "
        );

        let list_style = css!(
            "
                list-style: none;
                width: 500px;
                max-width: 90vw;
                padding: 0;
            "
        );

        let row_style = css!(
            "
                border: 1px solid ${box_border_color};
                border-radius: 5px;
                background-color: ${contrast_bg_color};
                margin-bottom: 10px;
                padding: 10px 15px;
            ",
            box_border_color = box_border_color,
            contrast_bg_color = contrast_bg_color,
        );

        let rows = self
            .users
            .iter()
            .map(|user| {
                html! {
                    <li key={user.id} class={row_style.clone()}>
                        { format!("Email Address: {}", user.email) }
                    </li>
                }
            })
            .collect::<Html>();

        html! {
            <>
                <PageTitle title={"Users data"}/>

                <div class={wrapper_style}>
                    <h1>{ "Users data" }</h1>
                    <ul class={list_style}>
                        { rows }
                    </ul>
                </div>
            </>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_future(async {
                match supabase::select_all::<UserRow>("users").await {
                    Ok(users) => Self::Message::UsersLoaded(users),
                    Err(error) => Self::Message::FetchFailed(error),
                }
            });
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::UsersLoaded(users) => {
                self.users = users;
                true
            }
            Self::Message::FetchFailed(error) => {
                console::error!(format!("Error fetching users: {error}"));
                false
            }
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                self.theme_ctx.set(theme_ctx);
                true
            }
        }
    }
}
