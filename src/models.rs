//! Frontend Models
//!
//! Records served by the REST resources, plus the draft type edited by forms.

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Anything that carries a server-assigned identifier
pub trait Entity {
    fn id(&self) -> u32;
}

/// Field set of one resource type (everything except `id`)
pub trait Resource:
    Clone + PartialEq + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Singular, lowercase name used in prompts and notices
    const LABEL: &'static str;

    /// Short human-readable description of one record
    fn summary(&self) -> String;

    /// Clean-up applied right before a write (blank list entries etc.)
    fn normalized(self) -> Self {
        self
    }
}

/// A stored record: id plus the resource's fields, flat on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<F> {
    pub id: u32,
    #[serde(flatten)]
    pub fields: F,
}

impl<F> Record<F> {
    pub fn new(id: u32, fields: F) -> Self {
        Self { id, fields }
    }
}

impl<F> Entity for Record<F> {
    fn id(&self) -> u32 {
        self.id
    }
}

impl<F> Deref for Record<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.fields
    }
}

impl<F> DerefMut for Record<F> {
    fn deref_mut(&mut self) -> &mut F {
        &mut self.fields
    }
}

/// A record under construction; `id` is `None` until the create succeeds
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft<F> {
    pub id: Option<u32>,
    pub fields: F,
}

impl<F> Draft<F> {
    pub fn new(fields: F) -> Self {
        Self { id: None, fields }
    }
}

impl<F: Clone> From<&Record<F>> for Draft<F> {
    fn from(record: &Record<F>) -> Self {
        Self {
            id: Some(record.id),
            fields: record.fields.clone(),
        }
    }
}

fn drop_blank(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

// ========================
// Post
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    pub title: String,
    pub body: String,
    pub user_id: u32,
    pub tags: Vec<String>,
    #[serde(deserialize_with = "reaction_count")]
    pub reactions: u32,
}

impl Default for Post {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            user_id: 1,
            tags: Vec::new(),
            reactions: 0,
        }
    }
}

impl Resource for Post {
    const LABEL: &'static str = "post";

    fn summary(&self) -> String {
        self.title.clone()
    }

    fn normalized(self) -> Self {
        Self {
            tags: drop_blank(self.tags),
            ..self
        }
    }
}

/// DummyJSON reports reactions as `{likes, dislikes}`; older payloads use a bare count
#[derive(Deserialize)]
#[serde(untagged)]
enum ReactionsRepr {
    Count(u32),
    Split {
        #[serde(default)]
        likes: u32,
        #[serde(default)]
        dislikes: u32,
    },
}

fn reaction_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ReactionsRepr::deserialize(deserializer)? {
        ReactionsRepr::Count(count) => count,
        ReactionsRepr::Split { likes, dislikes } => likes + dislikes,
    })
}

// ========================
// Recipe
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    /// DummyJSON sends a list of steps; forms edit them as one block of text
    #[serde(deserialize_with = "instruction_text")]
    pub instructions: String,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub calories_per_serving: u32,
    pub tags: Vec<String>,
    pub user_id: u32,
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            name: String::new(),
            ingredients: Vec::new(),
            instructions: String::new(),
            prep_time_minutes: 0,
            cook_time_minutes: 0,
            servings: 1,
            difficulty: Difficulty::Easy,
            cuisine: String::new(),
            calories_per_serving: 0,
            tags: Vec::new(),
            user_id: 1,
        }
    }
}

impl Resource for Recipe {
    const LABEL: &'static str = "recipe";

    fn summary(&self) -> String {
        self.name.clone()
    }

    fn normalized(self) -> Self {
        Self {
            ingredients: drop_blank(self.ingredients),
            tags: drop_blank(self.tags),
            servings: self.servings.max(1),
            ..self
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InstructionsRepr {
    Text(String),
    Steps(Vec<String>),
}

fn instruction_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match InstructionsRepr::deserialize(deserializer)? {
        InstructionsRepr::Text(text) => text,
        InstructionsRepr::Steps(steps) => steps.join("\n"),
    })
}

// ========================
// Quote
// ========================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

impl Resource for Quote {
    const LABEL: &'static str = "quote";

    fn summary(&self) -> String {
        format!("\u{201c}{}\u{201d} by {}", self.quote, self.author)
    }
}

// ========================
// Todo
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Todo {
    pub todo: String,
    pub completed: bool,
    pub user_id: u32,
}

impl Default for Todo {
    fn default() -> Self {
        Self {
            todo: String::new(),
            completed: false,
            user_id: 1,
        }
    }
}

impl Resource for Todo {
    const LABEL: &'static str = "todo";

    fn summary(&self) -> String {
        self.todo.clone()
    }
}

// ========================
// Comment
// ========================

/// Author reference as embedded by DummyJSON
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentUser {
    pub id: u32,
    pub username: String,
}

/// A comment from either mock service: DummyJSON embeds `user`,
/// JSONPlaceholder sends `name`/`email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    pub body: String,
    pub post_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<CommentUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Default for Comment {
    fn default() -> Self {
        Self {
            body: String::new(),
            post_id: 1,
            user: None,
            user_id: Some(1),
            name: None,
            email: None,
        }
    }
}

impl Comment {
    pub fn author(&self) -> String {
        match (&self.user, &self.name, &self.email) {
            (Some(user), _, _) => format!("@{}", user.username),
            (None, Some(name), Some(email)) => format!("{} <{}>", name, email),
            (None, Some(name), None) => name.clone(),
            (None, None, Some(email)) => email.clone(),
            (None, None, None) => match self.user_id {
                Some(id) => format!("user #{}", id),
                None => "anonymous".to_string(),
            },
        }
    }
}

impl Resource for Comment {
    const LABEL: &'static str = "comment";

    fn summary(&self) -> String {
        let mut text: String = self.body.chars().take(40).collect();
        if self.body.chars().count() > 40 {
            text.push('…');
        }
        text
    }

    fn normalized(self) -> Self {
        Self {
            body: self.body.trim().to_string(),
            ..self
        }
    }
}
