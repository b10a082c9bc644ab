use yew::prelude::*;
use web_sys::HtmlInputElement;

pub const INTEREST_LABELS: [&str; 15] = [
    "Graphic Design",
    "Coding",
    "DevOps",
    "UI/UX",
    "Frontend",
    "Backend",
    "AI/ML",
    "Game Dev",
    "Digital Arts",
    "Content Creation",
    "Project Management",
    "Psychology",
    "Healthcare Tech",
    "Creative Writing",
    "Marketing",
];

const FORM_CSS: &str = r#"
    .step-form {
        width: 100%;
        max-width: 28rem;
        padding: 0 1rem;
        animation: step-rise 0.5s ease-out both;
    }
    .step-form.wide {
        max-width: 32rem;
        text-align: center;
    }
    .step-form h2 {
        font-size: 2.25rem;
        font-weight: 700;
        text-align: center;
        margin-bottom: 2rem;
        letter-spacing: -0.02em;
    }
    .step-input-row {
        position: relative;
        width: 100%;
    }
    .step-input-row input {
        width: 100%;
        padding: 1rem 5rem 1rem 1.5rem;
        border-radius: 9999px;
        border: 2px solid #e5e7eb;
        background: rgba(255, 255, 255, 0.5);
        backdrop-filter: blur(4px);
        transition: border-color 0.2s, box-shadow 0.2s;
    }
    .step-input-row input:focus {
        outline: none;
        border-color: #06b6d4;
        box-shadow: 0 0 0 4px rgba(165, 243, 252, 0.5);
    }
    .step-submit {
        position: absolute;
        right: 0.5rem;
        top: 50%;
        transform: translateY(-50%);
        border: none;
        border-radius: 9999px;
        padding: 0.75rem 1rem;
        color: white;
        cursor: pointer;
        background: linear-gradient(to right, #06b6d4, #3b82f6);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        transition: transform 0.15s;
    }
    .step-submit:hover { transform: translateY(-50%) scale(1.05); }
    .step-submit:active { transform: translateY(-50%) scale(0.95); }
    .interest-grid {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 0.75rem;
        margin-bottom: 2rem;
    }
    .interest-chip {
        border: none;
        border-radius: 9999px;
        padding: 0.6rem 1.25rem;
        font-weight: 600;
        cursor: pointer;
        background: #e5e7eb;
        color: #1f2937;
        transition: background-color 0.2s, color 0.2s, transform 0.15s;
    }
    .interest-chip:hover { transform: scale(1.05); }
    .interest-chip.selected {
        background: #3b82f6;
        color: #ffffff;
    }
    .finish-button {
        position: static;
        transform: none;
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 1.5rem;
    }
    .finish-button:hover { transform: scale(1.1); }
    .finish-button:active { transform: scale(0.9); }
    @keyframes step-rise {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
"#;

#[function_component(FormStyles)]
pub fn form_styles() -> Html {
    html! { <style>{FORM_CSS}</style> }
}

#[derive(Properties, PartialEq)]
pub struct TextStepProps {
    pub on_submit: Callback<String>,
}

#[function_component(NameForm)]
pub fn name_form(props: &TextStepProps) -> Html {
    let name = use_state(String::new);

    let oninput = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                on_submit.emit(trimmed.to_string());
            }
        })
    };

    html! {
        <div class="step-form">
            <h2>{"What should we call you?"}</h2>
            <form class="step-input-row" {onsubmit}>
                <input type="text" placeholder="Your name" value={(*name).clone()} {oninput} />
                <button type="submit" class="step-submit" aria-label="Continue">{"→"}</button>
            </form>
        </div>
    }
}

#[function_component(StudentIdForm)]
pub fn student_id_form(props: &TextStepProps) -> Html {
    let student_id = use_state(String::new);

    let oninput = {
        let student_id = student_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            student_id.set(input.value());
        })
    };

    let onsubmit = {
        let student_id = student_id.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*student_id).clone());
        })
    };

    html! {
        <div class="step-form">
            <h2>{"What's your student ID?"}</h2>
            <form class="step-input-row" {onsubmit}>
                <input type="text" placeholder="Student ID" value={(*student_id).clone()} {oninput} />
                <button type="submit" class="step-submit" aria-label="Continue">{"→"}</button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InterestFormProps {
    pub on_submit: Callback<Vec<String>>,
    /// Selection to start from.
    #[prop_or_default]
    pub value: Vec<String>,
}

#[function_component(InterestForm)]
pub fn interest_form(props: &InterestFormProps) -> Html {
    let selected = {
        let value = props.value.clone();
        use_state(move || value)
    };

    let toggle = |label: &'static str| {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*selected).clone();
            if let Some(position) = next.iter().position(|s| s == label) {
                next.remove(position);
            } else {
                next.push(label.to_string());
            }
            selected.set(next);
        })
    };

    let onsubmit = {
        let selected = selected.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*selected).clone());
        })
    };

    html! {
        <div class="step-form wide">
            <h2>{"What are you interested in?"}</h2>
            <div class="interest-grid">
                { for INTEREST_LABELS.iter().map(|label| {
                    let is_selected = selected.iter().any(|s| s == label);
                    html! {
                        <button
                            type="button"
                            key={*label}
                            class={classes!("interest-chip", is_selected.then(|| "selected"))}
                            onclick={toggle(*label)}
                        >
                            {*label}
                        </button>
                    }
                }) }
            </div>
            <form {onsubmit}>
                <button type="submit" class="step-submit finish-button">
                    <span>{"Finish"}</span>
                    {"→"}
                </button>
            </form>
        </div>
    }
}
