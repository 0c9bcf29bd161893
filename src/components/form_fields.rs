//! Form Field Components
//!
//! Labelled inputs used by the per-resource field renderers. Each field
//! starts from a plain value and reports edits through `on_change`.

use leptos::prelude::*;

/// How a list field splits its text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSeparator {
    /// `a, b, c`
    Comma,
    /// One entry per line
    Line,
}

impl ListSeparator {
    fn split_on(&self) -> char {
        match self {
            ListSeparator::Comma => ',',
            ListSeparator::Line => '\n',
        }
    }

    fn join_with(&self) -> &'static str {
        match self {
            ListSeparator::Comma => ", ",
            ListSeparator::Line => "\n",
        }
    }
}

/// Split list text into trimmed entries. Blank entries are kept so the
/// text can be mid-edit; they are dropped when the record is written.
pub fn split_list(text: &str, separator: ListSeparator) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(separator.split_on())
        .map(|part| part.trim().to_string())
        .collect()
}

pub fn join_list(values: &[String], separator: ListSeparator) -> String {
    values.join(separator.join_with())
}

/// Parse a non-negative integer input, falling back to `min` on garbage
pub fn parse_number(text: &str, min: u32) -> u32 {
    text.trim().parse::<u32>().map(|n| n.max(min)).unwrap_or(min)
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                type="text"
                value=value
                placeholder=placeholder
                required=required
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <textarea
                rows=rows.to_string()
                required=required
                prop:value=value
                on:input=move |ev| on_change.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

#[component]
pub fn NumberField(
    #[prop(into)] label: String,
    value: u32,
    #[prop(into)] on_change: Callback<u32>,
    #[prop(optional)] min: u32,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                type="number"
                min=min.to_string()
                value=value.to_string()
                on:input=move |ev| on_change.run(parse_number(&event_target_value(&ev), min))
            />
        </label>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    checked: bool,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="field field-inline">
            <input
                type="checkbox"
                checked=checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="field-label">{label}</span>
        </label>
    }
}

/// Dropdown over a fixed set of labels
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    options: &'static [&'static str],
    #[prop(into)] value: String,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select on:change=move |ev| on_change.run(event_target_value(&ev))>
                {options.iter().map(|option| {
                    let selected = *option == value;
                    view! { <option value=*option selected=selected>{*option}</option> }
                }).collect_view()}
            </select>
        </label>
    }
}

/// List of strings edited as comma- or line-separated text
#[component]
pub fn ListField(
    #[prop(into)] label: String,
    values: Vec<String>,
    separator: ListSeparator,
    #[prop(into)] on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let (text, set_text) = signal(join_list(&values, separator));
    let on_input = move |raw: String| {
        on_change.run(split_list(&raw, separator));
        set_text.set(raw);
    };

    let input = match separator {
        ListSeparator::Comma => view! {
            <input
                type="text"
                prop:value=move || text.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        }
        .into_any(),
        ListSeparator::Line => view! {
            <textarea
                rows="4"
                prop:value=move || text.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
    };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            {input}
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_comma_list() {
        assert_eq!(
            split_list("italian, pizza ,quick", ListSeparator::Comma),
            vec!["italian", "pizza", "quick"]
        );
        assert_eq!(split_list("a, ", ListSeparator::Comma), vec!["a", ""]);
        assert!(split_list("  ", ListSeparator::Comma).is_empty());
    }

    #[test]
    fn test_split_line_list() {
        assert_eq!(
            split_list("2 cups flour\n 1 tsp salt\n", ListSeparator::Line),
            vec!["2 cups flour", "1 tsp salt", ""]
        );
    }

    #[test]
    fn test_join_list() {
        let values = vec!["a".to_string(), "b".to_string()];
        assert_eq!(join_list(&values, ListSeparator::Comma), "a, b");
        assert_eq!(join_list(&values, ListSeparator::Line), "a\nb");
        assert_eq!(split_list(&join_list(&values, ListSeparator::Comma), ListSeparator::Comma), values);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("15", 0), 15);
        assert_eq!(parse_number(" 3 ", 1), 3);
        assert_eq!(parse_number("0", 1), 1);
        assert_eq!(parse_number("", 1), 1);
        assert_eq!(parse_number("-4", 0), 0);
        assert_eq!(parse_number("abc", 0), 0);
    }
}
