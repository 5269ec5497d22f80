pub use crate::router::Route;

pub use std::rc::Rc;

pub use gloo_console as console;
pub use gloo_net::http::Response;
pub use serde::{Deserialize, Serialize};
pub use stylist::yew::{styled_component, Global};
pub use stylist::{css, style, Style};
pub use yew::prelude::*;
pub use yew_router::prelude::*;

pub trait ResponseExtend {
    fn log_status(&self);
}

impl ResponseExtend for Response {
    fn log_status(&self) {
        console::log!(format!("{} status {}", self.url(), self.status()));
    }
}
