mod app;
mod components;
mod interfacing;
mod router;
mod supabase;
mod switch;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
