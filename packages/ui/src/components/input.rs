use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: "{html_for}", {children} }
    }
}

/// Text input bound to a string value.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    #[props(default)] step: String,
    #[props(default)] min: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            disabled: disabled,
            required: required,
            step: if !step.is_empty() { "{step}" },
            min: if !min.is_empty() { "{min}" },
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] placeholder: String,
    #[props(default = 3)] rows: u32,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "input textarea",
            placeholder: "{placeholder}",
            rows: "{rows}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// `<select>` over `(value, label)` pairs.
#[component]
pub fn Select(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "input select {class}",
            disabled: disabled,
            value: "{value}",
            onchange: move |evt| onchange.call(evt),
            for (option_value, label) in options {
                option {
                    key: "{option_value}",
                    value: "{option_value}",
                    selected: option_value == value,
                    "{label}"
                }
            }
        }
    }
}

#[component]
pub fn Checkbox(
    #[props(default)] id: String,
    checked: bool,
    onchange: EventHandler<bool>,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "checkbox",
            input {
                id: "{id}",
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            {children}
        }
    }
}
