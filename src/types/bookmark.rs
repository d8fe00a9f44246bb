use serde::{Deserialize, Serialize};

/// Presentational tag rendered next to a category name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconType {
    All,
    Tools,
    Media,
    Resources,
    #[default]
    Misc,
}

impl IconType {
    /// Parses the lowercase tag used in stored records and RPC params.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(IconType::All),
            "tools" => Some(IconType::Tools),
            "media" => Some(IconType::Media),
            "resources" => Some(IconType::Resources),
            "misc" => Some(IconType::Misc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconType::All => "all",
            IconType::Tools => "tools",
            IconType::Media => "media",
            IconType::Resources => "resources",
            IconType::Misc => "misc",
        }
    }
}

/// A named, ordered group of bookmarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon_type: IconType,
}

/// A single link entry belonging to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub category_id: String,
}

/// User-editable bookmark fields, shared by add and edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkFields {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(alias = "category_id")]
    pub category_id: String,
}

/// Pending bookmark form contents.
///
/// `target_id` is `None` when the draft creates a new bookmark and names the
/// bookmark being replaced otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkDraft {
    #[serde(default, alias = "target_id")]
    pub target_id: Option<String>,
    #[serde(flatten)]
    pub fields: BookmarkFields,
}

impl BookmarkDraft {
    /// Starts a blank draft for a new bookmark in `category_id`.
    pub fn create(category_id: &str) -> Self {
        Self {
            target_id: None,
            fields: BookmarkFields {
                category_id: category_id.to_string(),
                ..BookmarkFields::default()
            },
        }
    }

    /// Starts a draft pre-filled from an existing bookmark.
    pub fn edit(bookmark: &Bookmark) -> Self {
        Self {
            target_id: Some(bookmark.id.clone()),
            fields: BookmarkFields {
                name: bookmark.name.clone(),
                url: bookmark.url.clone(),
                description: bookmark.description.clone(),
                icon: bookmark.icon.clone(),
                category_id: bookmark.category_id.clone(),
            },
        }
    }

    pub fn is_update(&self) -> bool {
        self.target_id.is_some()
    }
}

/// Result of a category delete: the category itself and the ids of the
/// bookmarks removed with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRemoval {
    pub category: Category,
    pub removed_bookmarks: Vec<String>,
}

/// One category with its bookmarks, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySection {
    pub category: Category,
    pub bookmarks: Vec<Bookmark>,
}
