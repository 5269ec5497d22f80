use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/users")]
    Users,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use yew_router::Routable;

    use super::Route;

    #[test]
    fn routes_map_to_their_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Users.to_path(), "/users");
        assert_eq!(Route::NotFound.to_path(), "/404");
    }

    #[test]
    fn paths_recognize_their_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/users"), Some(Route::Users));
        assert_eq!(Route::recognize("/nonexistent"), Some(Route::NotFound));
    }
}
