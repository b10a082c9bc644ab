use yew::prelude::*;
use log::{debug, warn};
use web_sys::Element;

use crate::components::splash::{HeroTitle, Splash};
use crate::components::wizard::WizardSections;
use crate::config::Configuration;
use crate::dom;
use crate::scroll::native::DeclaredRule;

pub const VERBS: [&str; 22] = [
    "design.",
    "prototype.",
    "solve.",
    "build.",
    "develop.",
    "debug.",
    "learn.",
    "cook.",
    "ship.",
    "prompt.",
    "collaborate.",
    "create.",
    "inspire.",
    "follow.",
    "innovate.",
    "test.",
    "optimize.",
    "teach.",
    "visualize.",
    "transform.",
    "scale.",
    "do it.",
];

const PAGE_CSS: &str = r#"
    :root {
        --start: 0;
        --end: 360;
        --lightness: 65%;
        --base-chroma: 0.3;
        --list-font: clamp(2.5rem, 6vw, 4.5rem);
        --item-line: calc(var(--list-font) * 1.25);
        color-scheme: light dark;
    }
    [data-theme='light'] { --lightness: 65%; color-scheme: light only; }
    [data-theme='dark'] { --lightness: 75%; color-scheme: dark only; }
    @media (prefers-color-scheme: dark) {
        [data-theme='system'] { --lightness: 75%; }
    }
    [data-sync-scrollbar='true'] {
        scrollbar-color: oklch(var(--lightness) var(--chroma, 0) var(--hue, 0)) #0000;
    }
    [data-snap='true'] { scroll-snap-type: y proximity; }
    [data-snap='true'] .verb-list li { scroll-snap-align: center; }
    [data-debug='true'] .verb-list li { outline: 0.05em dashed currentColor; }
    [data-debug='true'] :is(.content-section h2, .verb-list li:last-of-type) {
        outline: 0.05em dashed canvasText;
    }

    *, *:after, *:before { box-sizing: border-box; }
    body {
        margin: 0;
        background: light-dark(white, black);
        font-family: 'Geist', 'Helvetica Neue', Helvetica, Arial, sans-serif, system-ui;
    }
    body::before {
        --size: 45px;
        --line: color-mix(in hsl, canvasText, transparent 70%);
        content: '';
        position: fixed;
        top: 0;
        height: 100vh;
        width: 100vw;
        background:
            linear-gradient(90deg, var(--line) 1px, transparent 1px var(--size)) 50% 50% / var(--size) var(--size),
            linear-gradient(var(--line) 1px, transparent 1px var(--size)) 50% 50% / var(--size) var(--size);
        mask: linear-gradient(-20deg, transparent 50%, white);
        pointer-events: none;
        z-index: -1;
    }
    .page-container {
        overflow-x: clip;
        min-height: 100vh;
        min-height: calc(var(--vh, 1vh) * 100);
    }
    .page-section {
        scroll-snap-align: start;
        scroll-snap-stop: always;
    }
    .page-header {
        position: relative;
        min-height: 100vh;
        min-height: calc(var(--vh, 1vh) * 100);
        display: grid;
        place-items: center;
        width: 100%;
    }

    .splash {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        background: #f8f9fa;
    }
    .splash-dot {
        width: 4rem;
        height: 4rem;
        border-radius: 9999px;
        animation: splash-pulse 2s ease-in-out infinite;
    }
    @keyframes splash-pulse {
        0%, 100% { background-color: #4285F4; transform: scale(1); }
        25% { background-color: #DB4437; transform: scale(1.2); }
        50% { background-color: #F4B400; transform: scale(1); }
        75% { background-color: #0F9D58; transform: scale(1.2); }
    }

    .hero-title {
        display: flex;
        font-family: 'Inter', sans-serif;
        font-size: clamp(3.75rem, 10vw, 6rem);
        font-weight: 700;
        letter-spacing: -0.05em;
        margin: 0;
    }
    .hero-letter {
        display: inline-block;
        animation: letter-in 0.6s cubic-bezier(0.34, 1.56, 0.64, 1) both;
    }
    @keyframes letter-in {
        from { opacity: 0; transform: translateY(50px) scale(0.5); filter: blur(10px); }
        to { opacity: 1; transform: none; filter: blur(0); }
    }
    .hero-chevron {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        font-size: 2rem;
        animation: chevron-bob 1.5s ease-in-out infinite;
    }
    @keyframes chevron-bob {
        0%, 100% { transform: translate(-50%, 0); }
        50% { transform: translate(-50%, -10px); }
    }

    .content-section {
        display: flex;
        width: 100%;
        padding-left: 5rem;
        font-size: var(--list-font);
        line-height: var(--item-line);
    }
    .content-section h2 {
        position: sticky;
        top: calc(50% - 0.5lh);
        display: inline-block;
        height: fit-content;
        margin: 0;
        font-size: inherit;
        font-weight: 600;
    }
    .verb-list {
        --step: calc((var(--end) - var(--start)) / (var(--count) - 1));
        margin: 0;
        padding-inline: 0;
        font-weight: 600;
        list-style-type: none;
    }
    .verb-list li {
        height: var(--item-line);
        line-height: var(--item-line);
        white-space: nowrap;
    }
    .verb-list li:not(:last-of-type) {
        color: oklch(var(--lightness) var(--base-chroma) calc(var(--start) + (var(--step) * var(--i))));
    }
    .content-section h2, .verb-list li:last-of-type {
        background: linear-gradient(canvasText 50%, color-mix(in oklch, canvas, canvasText 25%));
        background-clip: text;
        color: #0000;
    }
    .wizard-section {
        height: 100vh;
        height: 100dvh;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .page-footer {
        padding-block: 2rem;
        opacity: 0.5;
        text-align: center;
    }
    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        padding: 0;
        margin: -1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
        white-space: nowrap;
        border-width: 0;
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_state(Configuration::load);
    let loading = use_state(|| true);
    let list_ref = use_node_ref();

    {
        let list_ref = list_ref.clone();
        let config = (*config).clone();
        use_effect_with_deps(
            move |_| {
                let mount = list_ref.cast::<Element>().and_then(|list| {
                    match dom::mount_document(&list, config) {
                        Ok(mount) => Some(mount),
                        Err(e) => {
                            warn!("Scroll animation not mounted: {}", e);
                            None
                        }
                    }
                });
                move || drop(mount)
            },
            (),
        );
    }

    let on_finished = {
        let loading = loading.clone();
        Callback::from(move |_: ()| {
            debug!("Splash finished");
            loading.set(false);
        })
    };

    let rule_css = DeclaredRule::declare(&config, VERBS.len()).stylesheet();
    let list_style = format!("--count: {};", VERBS.len());

    html! {
        <>
            <style>{PAGE_CSS}</style>
            <style>{rule_css}</style>
            <div class="page-container">
                <header class="page-header page-section">
                    if *loading {
                        <Splash {on_finished} />
                    } else {
                        <HeroTitle />
                    }
                </header>
                <main>
                    <section class="content-section page-section">
                        <h2>
                            <span aria-hidden="true">{"you can\u{a0}"}</span>
                            <span class="sr-only">{"you can ship things."}</span>
                        </h2>
                        <ul ref={list_ref} class="verb-list" aria-hidden="true" style={list_style}>
                            { for VERBS.iter().enumerate().map(|(i, verb)| html! {
                                <li key={*verb} style={format!("--i: {};", i)}>{*verb}</li>
                            }) }
                        </ul>
                    </section>
                    <WizardSections />
                </main>
                <footer class="page-footer page-section">{"@tyronscott_ 2024"}</footer>
            </div>
        </>
    }
}
