use yew::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::navigation::{NavigationState, Section};
use crate::theme::ThemeMode;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub navigation: NavigationState,
    pub mode: ThemeMode,
    pub menu_open: bool,
    pub on_navigate: Callback<Section>,
    pub on_toggle_theme: Callback<MouseEvent>,
    pub on_toggle_menu: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps {
        navigation,
        mode,
        menu_open,
        on_navigate,
        on_toggle_theme,
        on_toggle_menu,
    } = props;

    let go_to = |section: Section| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    html! {
        <header class="site-header">
            <nav class="nav-content">
                <button class="nav-brand" onclick={go_to(Section::Hero)}>
                    {"Yazan Farrah"}
                </button>

                <div class="nav-links">
                    { for Section::LINKED.iter().map(|section| html! {
                        <button
                            key={section.id()}
                            class={classes!("nav-link", navigation.is_active(*section).then(|| "active"))}
                            onclick={go_to(*section)}
                        >
                            {section.label()}
                        </button>
                    }) }
                    <button class="theme-toggle" onclick={on_toggle_theme.clone()} aria-label="Toggle theme">
                        if mode.is_dark() {
                            <Icon glyph={Glyph::Sun} />
                        } else {
                            <Icon glyph={Glyph::Moon} />
                        }
                    </button>
                </div>

                <button class="burger-menu" onclick={on_toggle_menu.clone()} aria-label="Toggle menu">
                    if *menu_open {
                        <Icon glyph={Glyph::Close} />
                    } else {
                        <Icon glyph={Glyph::Menu} />
                    }
                </button>
            </nav>

            if *menu_open {
                <div class="mobile-drawer">
                    { for Section::LINKED.iter().map(|section| html! {
                        <button key={section.id()} class="drawer-link" onclick={go_to(*section)}>
                            {section.label()}
                        </button>
                    }) }
                    <button class="drawer-link" onclick={on_toggle_theme.clone()}>
                        { if mode.is_dark() { "Light Mode" } else { "Dark Mode" } }
                    </button>
                </div>
            }
        </header>
    }
}
