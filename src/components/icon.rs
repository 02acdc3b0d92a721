use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Award,
    ChevronDown,
    ChevronUp,
    Close,
    Code,
    GitBranch,
    Github,
    GraduationCap,
    Linkedin,
    Mail,
    Menu,
    Moon,
    Sun,
    Users,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Award => "🏅",
            Glyph::ChevronDown => "▾",
            Glyph::ChevronUp => "▴",
            Glyph::Close => "✕",
            Glyph::Code => "</>",
            Glyph::GitBranch => "⎇",
            Glyph::Github => "🐙",
            Glyph::GraduationCap => "🎓",
            Glyph::Linkedin => "in",
            Glyph::Mail => "✉",
            Glyph::Menu => "☰",
            Glyph::Moon => "☾",
            Glyph::Sun => "☀",
            Glyph::Users => "👥",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">
            {props.glyph.symbol()}
        </span>
    }
}
