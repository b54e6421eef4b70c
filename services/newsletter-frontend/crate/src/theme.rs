use gloo::utils::document_element;
use yew::prelude::*;

/// Page wide presentation mode. The active theme's name is mirrored as a
/// class on the document element so the stylesheet can key off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &Props) -> Html {
    let theme = use_state(|| Theme::Light);

    // Apply the theme class on activation, revert on change or teardown.
    use_effect_with(*theme, |theme| {
        let class_list = document_element().class_list();
        let name = theme.as_str();
        if let Err(err) = class_list.add_1(name) {
            gloo_console::error!("could not apply theme class:", err);
        }
        move || {
            let _ = class_list.remove_1(name);
        }
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(theme.toggled()))
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}
