//! Raw localization key to canonical i18n key conversion.
//!
//! Raw keys come from the game's localization dump and look like
//! `QiBean_Name` or `CactusSeedsOutside`. They map onto the dotted
//! `objects.<snake_base>[.<field>]` namespace used by the i18n files.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Namespace every migrated key lives under.
pub const NAMESPACE: &str = "objects";

static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid regex"));
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));

/// Field segment appended after the snake_cased base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Desc,
    FlavoredName,
    CollectionName,
    CollectionDesc,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Desc => "desc",
            Field::FlavoredName => "flavored_name",
            Field::CollectionName => "collection_name",
            Field::CollectionDesc => "collection_desc",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognized suffixes, compound ones first so `_Flavored_Name` is not
/// mistaken for a plain `_Name`.
const SUFFIXES: &[(&str, Field)] = &[
    ("_Flavored_Name", Field::FlavoredName),
    ("_CollectionsTabDescription", Field::CollectionDesc),
    ("_CollectionsTabName", Field::CollectionName),
    ("_Name", Field::Name),
    ("_Description", Field::Desc),
];

/// A canonical i18n key split into its snake_cased base and optional field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalKey {
    pub base: String,
    pub field: Option<Field>,
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", NAMESPACE, self.base)?;
        if let Some(field) = self.field {
            write!(f, ".{}", field)?;
        }
        Ok(())
    }
}

/// Split a raw key into its canonical parts.
///
/// Never fails: keys without a recognized suffix are converted whole and
/// carry no field.
pub fn to_canonical_key(raw: &str) -> CanonicalKey {
    let (base, field) = SUFFIXES
        .iter()
        .find_map(|(suffix, field)| raw.strip_suffix(suffix).map(|base| (base, Some(*field))))
        .unwrap_or((raw, None));

    CanonicalKey {
        base: camel_to_snake(base),
        field,
    }
}

/// Convert a raw key into its dotted i18n key.
///
/// ```
/// use loctool::keys::canonical_key;
///
/// assert_eq!(canonical_key("QiBean_Name"), "objects.qi_bean.name");
/// assert_eq!(canonical_key("QiBean_Description"), "objects.qi_bean.desc");
/// assert_eq!(canonical_key("CactusSeedsOutside"), "objects.cactus_seeds_outside");
/// ```
pub fn canonical_key(raw: &str) -> String {
    to_canonical_key(raw).to_string()
}

/// Build the `{{i18n:<key>}}` token the content patch uses to reference a key.
pub fn i18n_reference(key: &str) -> String {
    format!("{{{{i18n:{}}}}}", key)
}

/// CamelCase to snake_case in two regex passes.
///
/// Existing mod data depends on this exact output, including the quirks
/// around acronyms and embedded underscores.
pub fn camel_to_snake(name: &str) -> String {
    let first = WORD_BOUNDARY.replace_all(name, "${1}_${2}");
    LOWER_UPPER
        .replace_all(&first, "${1}_${2}")
        .to_lowercase()
}
