use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key under which a catalog stores its fallback image set.
pub const DEFAULT_VARIANT_KEY: &str = "default";

/// Normalizes a variant key to its canonical form: lowercase `axis:value`
/// pairs, alphabetically sorted by axis, comma-joined. `"default"` is kept
/// as-is. Normalizing on both the write and the lookup side makes key
/// matching order-independent and case-insensitive.
pub fn normalize_variant_key(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case(DEFAULT_VARIANT_KEY) {
        return DEFAULT_VARIANT_KEY.to_string();
    }
    let mut pairs: Vec<String> = trimmed
        .split(',')
        .map(|p| p.trim().to_ascii_lowercase())
        .filter(|p| !p.is_empty())
        .collect();
    pairs.sort();
    pairs.join(",")
}

/// The user's current choice per option axis (size, color, frame, ...).
/// Insertion order is preserved: single-axis image fallback walks axes in
/// the order the caller set them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantSelection {
    entries: Vec<(String, String)>,
}

impl VariantSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for an axis, replacing any previous value while
    /// keeping the axis at its original position. An empty or
    /// whitespace-only value clears the axis.
    pub fn set(&mut self, axis: impl Into<String>, value: impl Into<String>) {
        let axis = axis.into();
        let value = value.into();
        if value.trim().is_empty() {
            self.clear(&axis);
            return;
        }
        match self
            .entries
            .iter_mut()
            .find(|(a, _)| a.eq_ignore_ascii_case(&axis))
        {
            Some(entry) => entry.1 = value,
            None => self.entries.push((axis, value)),
        }
    }

    pub fn clear(&mut self, axis: &str) {
        self.entries.retain(|(a, _)| !a.eq_ignore_ascii_case(axis));
    }

    pub fn get(&self, axis: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(a, _)| a.eq_ignore_ascii_case(axis))
            .map(|(_, v)| v.as_str())
    }

    /// Active selections in insertion order. Values are guaranteed
    /// non-empty by `set`.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, v)| (a.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: Into<String>, V: Into<String>> FromIterator<(A, V)> for VariantSelection {
    fn from_iter<T: IntoIterator<Item = (A, V)>>(iter: T) -> Self {
        let mut selection = Self::new();
        for (axis, value) in iter {
            selection.set(axis, value);
        }
        selection
    }
}

/// Map from variant key to an ordered image-URL list. Keys are canonicalized
/// on insert; lookups tolerate raw keys (for maps deserialized from caller
/// data) by normalizing both sides. Empty image lists are treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantImages {
    images: HashMap<String, Vec<String>>,
}

impl VariantImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, urls: Vec<String>) {
        self.images.insert(normalize_variant_key(key), urls);
    }

    /// Case-insensitive, order-independent lookup returning only non-empty
    /// image lists.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        let target = normalize_variant_key(key);
        let hit = self
            .images
            .get(&target)
            .or_else(|| {
                self.images
                    .iter()
                    .find(|(k, _)| normalize_variant_key(k) == target)
                    .map(|(_, v)| v)
            })?;
        if hit.is_empty() {
            None
        } else {
            Some(hit.as_slice())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for VariantImages {
    fn from(raw: HashMap<String, Vec<String>>) -> Self {
        let mut images = Self::new();
        for (key, urls) in raw {
            images.insert(&key, urls);
        }
        images
    }
}

/// A priced size or variant choice. `price_delta` is added to the base price
/// when the option is selected; `hex` carries the swatch for color axes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedOption {
    pub name: String,
    #[serde(default)]
    pub price_delta: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_normalization_sorts_and_lowercases() {
        assert_eq!(normalize_variant_key("size:L,color:Red"), "color:red,size:l");
        assert_eq!(normalize_variant_key("color:red,size:l"), "color:red,size:l");
        assert_eq!(normalize_variant_key(" Default "), "default");
    }

    #[test]
    fn lookup_is_case_insensitive_and_order_independent() {
        let mut images = VariantImages::new();
        images.insert("size:l,color:red", vec!["x.jpg".into()]);
        assert_eq!(
            images.get("Color:Red,Size:L").map(|u| u[0].as_str()),
            Some("x.jpg")
        );
    }

    #[test]
    fn empty_lists_are_absent() {
        let mut images = VariantImages::new();
        images.insert("color:red", vec![]);
        assert!(images.get("color:red").is_none());
    }

    #[test]
    fn deserialized_caller_maps_resolve_without_canonical_keys() {
        let images: VariantImages =
            serde_json::from_str(r#"{"Size:L,Color:Red":["x.jpg"]}"#).unwrap();
        assert!(images.get("color:red,size:l").is_some());
    }

    #[test]
    fn selection_preserves_insertion_order_and_replaces_in_place() {
        let mut sel = VariantSelection::new();
        sel.set("size", "L");
        sel.set("color", "Red");
        sel.set("Size", "XL");
        let axes: Vec<_> = sel.active().map(|(a, _)| a).collect();
        assert_eq!(axes, vec!["size", "color"]);
        assert_eq!(sel.get("SIZE"), Some("XL"));
    }

    #[test]
    fn empty_value_clears_axis() {
        let mut sel = VariantSelection::new();
        sel.set("frame", "wood");
        sel.set("frame", "  ");
        assert!(sel.is_empty());
    }
}
