use yew::prelude::*;
use gloo_timers::callback::Timeout;

/// How long the loading splash covers the page, in milliseconds.
pub const SPLASH_MS: u32 = 2_500;

const TITLE: &str = "Animo.dev";
const TITLE_COLORS: [&str; 5] = ["#4285F4", "#DB4437", "#F4B400", "#0F9D58", "#4285F4"];

#[derive(Properties, PartialEq)]
pub struct SplashProps {
    pub on_finished: Callback<()>,
}

#[function_component(Splash)]
pub fn splash(props: &SplashProps) -> Html {
    {
        let on_finished = props.on_finished.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(SPLASH_MS, move || on_finished.emit(()));
                // dropping the handle cancels a timer that has not fired yet
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class="splash">
            <div class="splash-dot"></div>
        </div>
    }
}

#[function_component(HeroTitle)]
pub fn hero_title() -> Html {
    html! {
        <div class="hero-title-wrap">
            <h2 class="hero-title">
                { for TITLE.chars().enumerate().map(|(index, ch)| {
                    let color = TITLE_COLORS.get(index).copied().unwrap_or("#1f2937");
                    let style = format!(
                        "color: {}; animation-delay: {:.2}s;",
                        color,
                        0.05 + index as f64 * 0.08
                    );
                    html! { <span class="hero-letter" {style}>{ch}</span> }
                }) }
            </h2>
            <div class="hero-chevron" aria-hidden="true">{"⌄"}</div>
        </div>
    }
}
