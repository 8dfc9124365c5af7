use yew::prelude::*;

#[function_component(NoFriendsFound)]
pub fn no_friends_found() -> Html {
    html! {
        <div class="card empty-state">
            <h3>{"No friends yet"}</h3>
            <p>{"Connect with language partners below to start practicing together!"}</p>
        </div>
    }
}
