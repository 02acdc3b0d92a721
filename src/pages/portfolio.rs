use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::icon::{Glyph, Icon};
use crate::components::nav::Header;
use crate::components::notification::{ToastAction, ToastStack, Toasts};
use crate::config;
use crate::contact::{self, ContactAction, ContactForm, Field};
use crate::content::{Expansion, SkillIcon, EDUCATION, SKILLS};
use crate::navigation::{self, NavigationState, Section};
use crate::theme::use_theme;

/// The whole site. Owns every piece of state; the sections only render it.
#[function_component(Page)]
pub fn page() -> Html {
    let theme = use_theme();
    let nav_state = use_state(NavigationState::default);
    let menu_open = use_state(|| false);
    let expansion = use_state(Expansion::default);
    let form = use_reducer(ContactForm::default);
    let toasts = use_reducer(Toasts::default);

    {
        let nav_state = nav_state.clone();
        use_event_with_window("scroll", move |_: Event| {
            let next = nav_state.observe(navigation::locate_active(navigation::measure));
            if next != *nav_state {
                nav_state.set(next);
            }
        });
    }

    let on_navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |section: Section| {
            navigation::scroll_to_section(section);
            menu_open.set(false);
        })
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let on_toggle_entry = {
        let expansion = expansion.clone();
        Callback::from(move |index: usize| expansion.set(expansion.toggle(index)))
    };

    let on_submit = {
        let form = form.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.in_flight {
                return;
            }
            let outgoing = form.outgoing();
            form.dispatch(ContactAction::Begin);

            let form = form.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let result = contact::deliver(config::RELAY_ENDPOINT, &outgoing).await;
                match &result {
                    Ok(()) => info!("Contact message delivered"),
                    Err(e) => warn!("Contact message not delivered: {}", e),
                }
                toasts.dispatch(ToastAction::for_delivery(&result));
                form.dispatch(ContactAction::Finish { delivered: result.is_ok() });
            });
        })
    };

    let on_edit = {
        let form = form.clone();
        Callback::from(move |(field, value): (Field, String)| {
            form.dispatch(ContactAction::Edit(field, value))
        })
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class={classes!("page", theme.mode.class())}>
            <style>{STYLES}</style>
            <Header
                navigation={*nav_state}
                mode={theme.mode}
                menu_open={*menu_open}
                on_navigate={on_navigate.clone()}
                on_toggle_theme={theme.toggle.clone()}
                on_toggle_menu={on_toggle_menu}
            />
            <main class="page-main">
                <Hero on_navigate={on_navigate} />
                <About />
                <Skills />
                <Education expansion={*expansion} on_toggle={on_toggle_entry} />
                <Contact form={(*form).clone()} on_edit={on_edit} on_submit={on_submit} />
            </main>
            <footer class="site-footer">
                <p>{"© 2023 Yazan Farrah. All rights reserved."}</p>
            </footer>
            if form.in_flight {
                <div class="loading-overlay">
                    <div class="loading-spinner"></div>
                </div>
            }
            <ToastStack notices={toasts.notices.clone()} on_dismiss={on_dismiss} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_navigate: Callback<Section>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Section::Contact);
        })
    };

    html! {
        <section id={Section::Hero.id()} class="hero">
            <img class="hero-portrait" src="/profile_image.jpeg" alt="Yazan Farrah" />
            <h1>{"Yazan Farrah"}</h1>
            <p class="hero-role">{"Senior Software Engineer"}</p>
            <button class="primary-button" onclick={onclick}>{"Get in Touch"}</button>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="band band-raised">
            <div class="container">
                <h2>{"About Me"}</h2>
                <div class="card">
                    <p>
                        {"I'm a passionate Senior Flutter Engineer with a knack for creating beautiful, \
                          performant mobile applications. With a strong foundation in computer science \
                          from Princess Sumaya University for Technology, I bring a blend of theoretical \
                          knowledge and practical expertise to every project."}
                    </p>
                    <p>
                        {"When I'm not crafting pixel-perfect UIs or optimizing app performance, you can \
                          find me exploring the latest in mobile development, contributing to open-source \
                          projects, or mentoring aspiring developers."}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    html! {
        <section id={Section::Skills.id()} class="band">
            <div class="container">
                <h2>{"Skills & Expertise"}</h2>
                <div class="skill-grid">
                    { for SKILLS.iter().map(|skill| html! {
                        <div key={skill.name} class="card skill-card">
                            { match skill.icon {
                                SkillIcon::Image(src) => html! { <img class="skill-logo" src={src} alt={skill.name} /> },
                                SkillIcon::Glyph(glyph) => html! { <Icon glyph={glyph} class={classes!("skill-glyph")} /> },
                            } }
                            <span class="skill-name">{skill.name}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct EducationProps {
    expansion: Expansion,
    on_toggle: Callback<usize>,
}

#[function_component(Education)]
fn education(props: &EducationProps) -> Html {
    html! {
        <section id={Section::Education.id()} class="band band-raised">
            <div class="container">
                <h2>{"Education"}</h2>
                <div class="education-list">
                    { for EDUCATION.iter().enumerate().map(|(index, record)| {
                        let expanded = props.expansion.is_expanded(index);
                        let onclick = {
                            let on_toggle = props.on_toggle.clone();
                            Callback::from(move |_: MouseEvent| on_toggle.emit(index))
                        };
                        html! {
                            <div key={index} class="card education-entry" style={format!("animation-delay: {}ms;", index * 100)}>
                                <div class="education-summary" onclick={onclick}>
                                    <div class="education-heading">
                                        <h3>{record.title}</h3>
                                        <Icon glyph={if expanded { Glyph::ChevronUp } else { Glyph::ChevronDown }} class={classes!("accent")} />
                                    </div>
                                    <p class="muted">{format!("{} | {}", record.institution, record.year)}</p>
                                </div>
                                if expanded {
                                    <div class="education-details">
                                        if let Some(description) = record.description {
                                            <p>{description}</p>
                                        }
                                        <h4>{"Activities and Achievements:"}</h4>
                                        <ul>
                                            { for record.activities.iter().enumerate().map(|(i, activity)| html! {
                                                <li key={i} style={format!("animation-delay: {}ms;", i * 100)}>
                                                    <Icon glyph={activity.icon} class={classes!("accent")} />
                                                    <span>{activity.text}</span>
                                                </li>
                                            }) }
                                        </ul>
                                    </div>
                                }
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ContactProps {
    form: ContactForm,
    on_edit: Callback<(Field, String)>,
    on_submit: Callback<SubmitEvent>,
}

#[function_component(Contact)]
fn contact(props: &ContactProps) -> Html {
    let edit_input = |field: Field| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((field, input.value()));
        })
    };

    let edit_message = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((Field::Message, input.value()));
        })
    };

    html! {
        <section id={Section::Contact.id()} class="band">
            <div class="container">
                <h2>{"Get in Touch"}</h2>
                <div class="contact-layout">
                    <div class="contact-intro">
                        <p class="muted">
                            {"Ready to bring your app idea to life? Let's collaborate and create something amazing together!"}
                        </p>
                        <div class="social-links">
                            <a href="https://github.com/YazanFarrah" aria-label="GitHub" target="_blank" rel="noopener noreferrer">
                                <Icon glyph={Glyph::Github} />
                            </a>
                            <a href="https://www.linkedin.com/in/yazan-farrah-795216227/" aria-label="LinkedIn" target="_blank" rel="noopener noreferrer">
                                <Icon glyph={Glyph::Linkedin} />
                            </a>
                            <a href="mailto:yazanfarrah@gmail.com" aria-label="Email">
                                <Icon glyph={Glyph::Mail} />
                            </a>
                        </div>
                        <p class="muted">
                            {"Or fill out the form, and I'll get back to you as soon as possible."}
                        </p>
                    </div>

                    <form class="card contact-form" onsubmit={props.on_submit.clone()}>
                        <label for="name">{"Name"}</label>
                        <input type="text" id="name" required=true
                            value={props.form.name.clone()}
                            oninput={edit_input(Field::Name)} />
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" required=true
                            value={props.form.email.clone()}
                            oninput={edit_input(Field::Email)} />
                        <label for="message">{"Message"}</label>
                        <textarea id="message" rows="4" required=true
                            value={props.form.message.clone()}
                            oninput={edit_message} />
                        <button type="submit" class="primary-button" disabled={props.form.in_flight}>
                            {"Send Message"}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

const STYLES: &str = r#"
.page {
    --accent: #3b82f6;
    --accent-strong: #2563eb;
    min-height: 100vh;
    transition: background-color 0.3s, color 0.3s;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.theme-light { --bg: #f3f4f6; --bg-raised: #ffffff; --card: #f3f4f6; --card-hover: #e5e7eb; --text: #111827; --muted: #4b5563; --dots: #00000010; }
.theme-dark { --bg: #111827; --bg-raised: #1f2937; --card: #374151; --card-hover: #4b5563; --text: #ffffff; --muted: #d1d5db; --dots: #ffffff10; }
.page { background: var(--bg); color: var(--text); }
.site-header {
    position: fixed; top: 0; left: 0; right: 0; z-index: 50;
    background-color: var(--bg-raised);
    background-image: radial-gradient(var(--dots) 1px, transparent 1px);
    background-size: 20px 20px;
    backdrop-filter: blur(4px);
}
.nav-content { display: flex; align-items: center; justify-content: space-between; max-width: 1200px; margin: 0 auto; padding: 1rem 1.5rem; }
.site-header button { background: none; border: none; color: inherit; cursor: pointer; font: inherit; }
.nav-brand { font-size: 1.5rem; font-weight: bold; }
.nav-links { display: flex; align-items: center; gap: 1.5rem; }
.nav-link:hover, .nav-link.active { color: var(--accent); }
.theme-toggle { padding: 0.5rem; border-radius: 9999px; background: var(--card) !important; }
.burger-menu { display: none; color: var(--accent) !important; font-size: 1.5rem; }
.mobile-drawer { padding: 0.5rem 0; background: var(--bg-raised); }
.drawer-link { display: block; width: 100%; text-align: left; padding: 0.5rem 1.5rem; }
.drawer-link:hover { background: var(--accent) !important; color: #fff !important; }
.page-main { padding-top: 5rem; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.band { padding: 5rem 0; background: var(--bg); }
.band-raised { background: var(--bg-raised); }
.band h2 { font-size: 2.25rem; text-align: center; margin-bottom: 3rem; }
.card { background: var(--card); border-radius: 0.5rem; padding: 2rem; box-shadow: 0 10px 15px rgba(0,0,0,0.1); }
.band-raised .card { background: var(--card); }
.band:not(.band-raised) .card { background: var(--bg-raised); }
.muted { color: var(--muted); }
.accent { color: var(--accent); }
.hero { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; }
.hero-portrait { width: 12rem; height: 12rem; border-radius: 50%; object-fit: cover; object-position: top; box-shadow: 0 10px 15px rgba(0,0,0,0.2); margin-bottom: 2rem; }
.hero h1 { font-size: 4.5rem; margin: 0 0 1rem; }
.hero-role { font-size: 1.875rem; color: var(--accent); margin-bottom: 2rem; }
.primary-button { background: var(--accent); color: #fff; font-weight: bold; border: none; border-radius: 9999px; padding: 0.75rem 1.5rem; font-size: 1.125rem; cursor: pointer; transition: background 0.3s; }
.primary-button:hover { background: var(--accent-strong); }
.primary-button:disabled { opacity: 0.6; cursor: wait; }
.skill-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
.skill-card { text-align: center; padding: 1.5rem; transition: transform 0.3s; }
.skill-card:hover { transform: scale(1.05); }
.skill-logo { height: 4rem; display: block; margin: 0 auto 1rem; }
.skill-glyph { display: block; font-size: 3rem; margin-bottom: 1rem; color: var(--accent); }
.skill-name { font-size: 1.125rem; font-weight: 600; }
.education-list { display: flex; flex-direction: column; gap: 1.5rem; }
.education-entry { padding: 0; overflow: hidden; animation: riseIn 0.5s ease-out both; }
.education-summary { padding: 1.5rem; cursor: pointer; transition: background 0.3s; }
.education-summary:hover { background: var(--card-hover); }
.education-heading { display: flex; justify-content: space-between; align-items: center; }
.education-heading h3 { font-size: 1.5rem; margin: 0; }
.education-details { padding: 0 1.5rem 1.5rem; color: var(--muted); animation: fadeIn 0.3s ease-out; }
.education-details h4 { color: var(--text); font-size: 1.25rem; }
.education-details ul { list-style: none; padding: 0; }
.education-details li { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.5rem; animation: slideIn 0.3s ease-out both; }
.contact-layout { display: flex; gap: 2rem; align-items: flex-start; }
.contact-intro, .contact-form { flex: 1; }
.social-links { display: flex; gap: 1rem; margin-bottom: 1rem; font-size: 2rem; }
.social-links a { color: var(--accent); text-decoration: none; }
.contact-form label { display: block; margin: 0 0 0.5rem; color: var(--muted); }
.contact-form input, .contact-form textarea { width: 100%; box-sizing: border-box; padding: 0.5rem 0.75rem; margin-bottom: 1rem; border: none; border-radius: 0.375rem; background: var(--card); color: var(--text); }
.contact-form .primary-button { width: 100%; border-radius: 0.375rem; font-size: 1rem; }
.site-footer { padding: 1.5rem; text-align: center; background: var(--bg-raised); color: var(--muted); }
.loading-overlay { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(31, 41, 55, 0.5); z-index: 60; }
.loading-spinner { width: 48px; height: 48px; border: 4px solid rgba(59,130,246,.25); border-top-color: var(--accent); border-radius: 50%; animation: spin 1s linear infinite; }
.toast-stack { position: fixed; top: 1rem; right: 1rem; z-index: 70; display: flex; flex-direction: column; gap: 0.5rem; }
.toast { min-width: 260px; padding: 1rem; border-radius: 0.375rem; background: #fff; color: #111827; box-shadow: 0 4px 12px rgba(0,0,0,0.15); border-left: 6px solid; cursor: pointer; animation: slideIn 0.3s ease-out; }
.toast-success { border-color: #07bc0c; }
.toast-failure { border-color: #e74c3c; }
@keyframes spin { to { transform: rotate(360deg); } }
@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
@keyframes riseIn { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
@keyframes slideIn { from { opacity: 0; transform: translateX(-20px); } to { opacity: 1; transform: translateX(0); } }
@media (max-width: 768px) {
    .nav-links { display: none; }
    .burger-menu { display: block; }
    .hero h1 { font-size: 3rem; }
    .skill-grid { grid-template-columns: repeat(2, 1fr); }
    .contact-layout { flex-direction: column; }
}
"#;
