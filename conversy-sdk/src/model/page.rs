use yew_router::Routable;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Page {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Register,
    #[at("/onboarding")]
    Onboarding,
    #[at("/friends")]
    Friends,
    #[at("/notifications")]
    Notifications,
    #[not_found]
    #[at("/404")]
    NotFound,
}
