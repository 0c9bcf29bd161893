//! Recipes Page

use leptos::prelude::*;

use crate::api::recipe_client;
use crate::components::{
    ListField, ListSeparator, NumberField, ResourcePage, SelectField, TextAreaField, TextField,
};
use crate::controller::PageController;
use crate::models::{Difficulty, Recipe, Record};

const DIFFICULTY_OPTIONS: &[&str] = &["Easy", "Medium", "Hard"];

#[component]
pub fn RecipesPage() -> impl IntoView {
    let ctrl = PageController::mount(recipe_client());

    let render_item = Callback::new(|recipe: Record<Recipe>| {
        let recipe = recipe.fields;
        view! {
            <h3>{recipe.name}</h3>
            <p class="card-subtitle">
                {format!("{} \u{2022} {}", recipe.cuisine, recipe.difficulty.as_str())}
            </p>
            <div class="card-meta">
                <p>
                    {format!(
                        "Prep: {} mins | Cook: {} mins",
                        recipe.prep_time_minutes, recipe.cook_time_minutes,
                    )}
                </p>
                <p>
                    {format!(
                        "Servings: {} | Calories: {} per serving",
                        recipe.servings, recipe.calories_per_serving,
                    )}
                </p>
            </div>
            <div class="tag-row">
                {recipe.tags.into_iter().map(|tag| view! { <span class="tag">"#"{tag}</span> }).collect_view()}
            </div>
        }
        .into_any()
    });

    let render_fields = Callback::new(|(draft, set_draft): (ReadSignal<Recipe>, WriteSignal<Recipe>)| {
        let start = draft.get_untracked();
        view! {
            <TextField
                label="Recipe Name"
                value=start.name
                required=true
                on_change=move |name: String| set_draft.update(|r| r.name = name)
            />
            <ListField
                label="Ingredients (one per line)"
                values=start.ingredients
                separator=ListSeparator::Line
                on_change={move |ingredients: Vec<String>| set_draft.update(|r| r.ingredients = ingredients)}
            />
            <TextAreaField
                label="Instructions"
                value=start.instructions
                rows=6
                on_change=move |text: String| set_draft.update(|r| r.instructions = text)
            />
            <div class="field-grid">
                <NumberField
                    label="Prep Time (minutes)"
                    value=start.prep_time_minutes
                    on_change=move |n: u32| set_draft.update(|r| r.prep_time_minutes = n)
                />
                <NumberField
                    label="Cook Time (minutes)"
                    value=start.cook_time_minutes
                    on_change=move |n: u32| set_draft.update(|r| r.cook_time_minutes = n)
                />
                <NumberField
                    label="Servings"
                    value=start.servings
                    min=1
                    on_change=move |n: u32| set_draft.update(|r| r.servings = n)
                />
                <NumberField
                    label="Calories Per Serving"
                    value=start.calories_per_serving
                    on_change=move |n: u32| set_draft.update(|r| r.calories_per_serving = n)
                />
                <SelectField
                    label="Difficulty"
                    options=DIFFICULTY_OPTIONS
                    value=start.difficulty.as_str()
                    on_change=move |label: String| {
                        set_draft.update(|r| r.difficulty = Difficulty::from_str(&label))
                    }
                />
                <TextField
                    label="Cuisine"
                    value=start.cuisine
                    on_change=move |cuisine: String| set_draft.update(|r| r.cuisine = cuisine)
                />
            </div>
            <ListField
                label="Tags (comma separated)"
                values=start.tags
                separator=ListSeparator::Comma
                on_change={move |tags: Vec<String>| set_draft.update(|r| r.tags = tags)}
            />
        }
        .into_any()
    });

    view! {
        <ResourcePage
            controller=ctrl
            title="Recipes"
            render_item=render_item
            render_fields=render_fields
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_options_cover_every_level() {
        let labels: Vec<&str> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(labels, DIFFICULTY_OPTIONS);
        for label in DIFFICULTY_OPTIONS {
            assert_eq!(Difficulty::from_str(label).as_str(), *label);
        }
    }
}
