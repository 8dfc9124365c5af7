use yew::prelude::*;

#[function_component(LogoIcon)]
pub fn logo_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1.5em" height="1.5em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
        <circle cx="12" cy="12" r="10"/>
        <path d="M12 2c-2.5 3-2.5 17 0 20"/>
        <path d="M2 12c3-2.5 17-2.5 20 0"/>
        <path d="M4.5 5.5c4 4.5 11 4.5 15 0"/>
    </svg>
    }
}

#[function_component(SunIcon)]
pub fn sun_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
        <circle cx="12" cy="12" r="4"/>
        <path d="M12 2v3M12 19v3M2 12h3M19 12h3M4.9 4.9l2.2 2.2M16.9 16.9l2.2 2.2M4.9 19.1l2.2-2.2M16.9 7.1l2.2-2.2"/>
    </svg>
    }
}

#[function_component(MoonIcon)]
pub fn moon_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
        <path d="M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z"/>
    </svg>
    }
}

#[function_component(BellIcon)]
pub fn bell_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1.2em" height="1.2em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
        <path d="M18 8a6 6 0 0 0-12 0c0 7-3 9-3 9h18s-3-2-3-9"/>
        <path d="M13.7 21a2 2 0 0 1-3.4 0"/>
    </svg>
    }
}

#[function_component(HomeIcon)]
pub fn home_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1.2em" height="1.2em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
        <path d="M3 10.5 12 3l9 7.5"/>
        <path d="M5 9.5V21h14V9.5"/>
        <path d="M10 21v-6h4v6"/>
    </svg>
    }
}

#[function_component(UsersIcon)]
pub fn users_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1.2em" height="1.2em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
        <circle cx="9" cy="8" r="4"/>
        <path d="M2 21c0-4 3-6 7-6s7 2 7 6"/>
        <path d="M17 4.5a4 4 0 0 1 0 7"/>
        <path d="M19 15.5c2 1 3 2.8 3 5.5"/>
    </svg>
    }
}

#[function_component(UserPlusIcon)]
pub fn user_plus_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
        <circle cx="9" cy="8" r="4"/>
        <path d="M2 21c0-4 3-6 7-6s7 2 7 6"/>
        <path d="M19 8v6M16 11h6"/>
    </svg>
    }
}

#[function_component(CheckCircleIcon)]
pub fn check_circle_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
        <circle cx="12" cy="12" r="10"/>
        <path d="M8 12.5l3 3 5-6"/>
    </svg>
    }
}

#[function_component(MapPinIcon)]
pub fn map_pin_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
        <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0"/>
        <circle cx="12" cy="10" r="3"/>
    </svg>
    }
}

#[function_component(LogoutIcon)]
pub fn logout_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1.2em" height="1.2em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
        <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>
        <path d="M16 17l5-5-5-5"/>
        <path d="M21 12H9"/>
    </svg>
    }
}

#[function_component(ShuffleIcon)]
pub fn shuffle_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
        <path d="M16 3h5v5"/>
        <path d="M3 20 21 3"/>
        <path d="M16 21h5v-5"/>
        <path d="M13 14l8 7"/>
        <path d="M3 4l7 6"/>
    </svg>
    }
}

#[function_component(CameraIcon)]
pub fn camera_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="2.5em" height="2.5em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
        <path d="M3 8a2 2 0 0 1 2-2h2l2-2h6l2 2h2a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>
        <circle cx="12" cy="13" r="4"/>
    </svg>
    }
}

#[function_component(AlertTriangleIcon)]
pub fn alert_triangle_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
        <path d="M10.3 3.9 1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0"/>
        <path d="M12 9v4M12 17h.01"/>
    </svg>
    }
}

#[function_component(XIcon)]
pub fn x_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
        <path d="M18 6 6 18M6 6l12 12"/>
    </svg>
    }
}

#[function_component(LoaderIcon)]
pub fn loader_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
        <path d="M12 2v4M12 18v4M4.9 4.9l2.9 2.9M16.2 16.2l2.9 2.9M2 12h4M18 12h4M4.9 19.1l2.9-2.9M16.2 7.8l2.9-2.9"/>
    </svg>
    }
}
