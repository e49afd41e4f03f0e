use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// One entry of a [`Select`].
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub label: AttrValue,
    pub value: AttrValue,
}

impl SelectOption {
    pub fn new(
        label: impl Into<AttrValue>,
        value: impl Into<AttrValue>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub options: Vec<SelectOption>,
    /// Shown while nothing is selected. Not selectable itself.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// Selected value. When unset the component tracks the selection
    /// itself.
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or(false)]
    pub required: bool,
    /// Validation message shown under the control
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Called with the value of the chosen option
    #[prop_or_default]
    pub onchange: Callback<String>,
}

/// The option whose value is `raw`, if any.
pub fn resolve_selection<'a>(
    options: &'a [SelectOption],
    raw: &str,
) -> Option<&'a SelectOption> {
    options.iter().find(|option| option.value.as_str() == raw)
}

/// Value to track and report when the user picks the option whose value
/// is `raw`. `None` if no option has that value.
pub fn choose(options: &[SelectOption], raw: &str) -> Option<AttrValue> {
    resolve_selection(options, raw).map(|option| option.value.clone())
}

/// The value the control shows. A controlled value always wins over the
/// tracked one.
pub fn displayed_value(
    controlled: Option<&AttrValue>,
    tracked: &AttrValue,
) -> AttrValue {
    controlled.unwrap_or(tracked).clone()
}

/// Placeholder text, marked with `*` when a choice is required.
pub fn placeholder_label(placeholder: &str, required: bool) -> String {
    if required {
        format!("{placeholder}*")
    } else {
        placeholder.to_string()
    }
}

/// Dropdown select with a placeholder and an open/closed chevron.
#[function_component]
pub fn Select(props: &Props) -> Html {
    let is_open = use_state(|| false);
    let selected = use_state(|| props.value.clone().unwrap_or_default());

    let current = displayed_value(props.value.as_ref(), &selected);

    let on_click = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let on_blur = {
        let is_open = is_open.clone();
        Callback::from(move |_: FocusEvent| is_open.set(false))
    };

    let on_change = {
        let selected = selected.clone();
        let is_open = is_open.clone();
        let options = props.options.clone();
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            if let Some(value) = choose(&options, &select.value()) {
                onchange.emit(value.to_string());
                selected.set(value);
            }
            is_open.set(false);
        })
    };

    let has_value = !current.is_empty();

    let select_class = classes!(
        "h-12",
        "w-full",
        "border",
        "px-4",
        "pr-10",
        "truncate",
        "font-semibold",
        "bg-transparent",
        "rounded-md",
        "appearance-none",
        "focus:outline-none",
        if props.error.is_some() {
            "border-red-500"
        } else {
            "border-neutral-300 dark:border-neutral-600"
        },
        if has_value || *is_open {
            "text-neutral-900 dark:text-neutral-100"
        } else {
            "text-neutral-400"
        },
    );

    let chevron_class = classes!(
        "absolute",
        "right-4",
        "top-6",
        "-translate-y-1/2",
        "transition-transform",
        "duration-300",
        (!*is_open).then_some("rotate-180"),
    );

    html! {
        <div class={classes!("relative", "flex", "flex-col", props.class.clone())}>
            <select
                name={props.name.clone()}
                class={select_class}
                required={props.required}
                aria-invalid={props.error.is_some().then_some("true")}
                onclick={on_click}
                onblur={on_blur}
                onchange={on_change}
            >
                if let Some(placeholder) = &props.placeholder {
                    <option value="" disabled={true} hidden={true} selected={!has_value}>
                        {placeholder_label(placeholder, props.required)}
                    </option>
                }
                {for props.options.iter().map(|option| html! {
                    <option
                        key={option.value.to_string()}
                        value={option.value.clone()}
                        selected={option.value == current}
                    >
                        {option.label.clone()}
                    </option>
                })}
            </select>

            <span class={chevron_class}>
                <svg
                    width="9"
                    height="4"
                    viewBox="0 0 9 4"
                    fill="none"
                    xmlns="http://www.w3.org/2000/svg"
                >
                    <path d="M4.5 0L9 4L0 4L4.5 0Z" fill="currentColor" />
                </svg>
            </span>

            if let Some(error) = &props.error {
                <p class="mt-1 text-sm text-red-600 dark:text-red-400">
                    {error.clone()}
                </p>
            }
        </div>
    }
}
