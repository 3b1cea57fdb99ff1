use crate::models::variant::{
    normalize_variant_key, VariantImages, VariantSelection, DEFAULT_VARIANT_KEY,
};

/// Serializes a selection to its canonical variant key: active axes sorted
/// alphabetically, lowercased, joined as `axis:value` pairs. The same
/// selection always produces the same key regardless of the order the user
/// picked options in. An empty selection maps to `"default"`.
///
/// This is the writer-side counterpart of [`resolve`]: catalogs built with
/// this key shape are guaranteed to be found by the lookup below.
pub fn generate_key(selection: &VariantSelection) -> String {
    if selection.is_empty() {
        return DEFAULT_VARIANT_KEY.to_string();
    }
    let joined = selection
        .active()
        .map(|(axis, value)| format!("{}:{}", axis, value))
        .collect::<Vec<_>>()
        .join(",");
    normalize_variant_key(&joined)
}

/// Resolves the image set for the current selection, most specific first:
///
/// 1. the full combination key for every active axis,
/// 2. each active axis alone, in selection insertion order,
/// 3. the `"default"` entry,
/// 4. `base_images`.
///
/// Matching is case-insensitive and skips empty image lists, so a catalog
/// can define images at the coarsest useful granularity (one set per color)
/// and override specific combinations without populating every pairing.
/// Resolution never fails; with no match and no base images it returns an
/// empty list.
pub fn resolve(
    variant_images: &VariantImages,
    base_images: &[String],
    selection: &VariantSelection,
) -> Vec<String> {
    if variant_images.is_empty() {
        return base_images.to_vec();
    }

    let mut candidates: Vec<String> = Vec::new();
    if !selection.is_empty() {
        candidates.push(generate_key(selection));
    }
    for (axis, value) in selection.active() {
        candidates.push(format!("{}:{}", axis, value));
    }
    candidates.push(DEFAULT_VARIANT_KEY.to_string());

    for candidate in &candidates {
        if let Some(urls) = variant_images.get(candidate) {
            return urls.to_vec();
        }
    }
    base_images.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn selection(pairs: &[(&str, &str)]) -> VariantSelection {
        pairs.iter().copied().collect()
    }

    #[test]
    fn empty_variant_map_falls_back_to_base() {
        let images = VariantImages::new();
        let base = urls(&["a.jpg", "b.jpg"]);
        let out = resolve(&images, &base, &selection(&[("size", "L")]));
        assert_eq!(out, base);
    }

    #[test]
    fn full_combination_wins_over_default() {
        let mut images = VariantImages::new();
        images.insert("size:l,color:red", urls(&["x.jpg"]));
        images.insert("default", urls(&["y.jpg"]));
        let out = resolve(&images, &[], &selection(&[("size", "L"), ("color", "Red")]));
        assert_eq!(out, urls(&["x.jpg"]));
    }

    #[test]
    fn single_axis_beats_base_fallback() {
        let mut images = VariantImages::new();
        images.insert("color:red", urls(&["x.jpg"]));
        let base = urls(&["z.jpg"]);
        let out = resolve(&images, &base, &selection(&[("size", "L"), ("color", "Red")]));
        assert_eq!(out, urls(&["x.jpg"]));
    }

    #[test]
    fn single_axis_candidates_follow_insertion_order() {
        let mut images = VariantImages::new();
        images.insert("size:l", urls(&["size.jpg"]));
        images.insert("color:red", urls(&["color.jpg"]));
        let first_size = resolve(&images, &[], &selection(&[("size", "L"), ("color", "Red")]));
        assert_eq!(first_size, urls(&["size.jpg"]));
        let first_color = resolve(&images, &[], &selection(&[("color", "Red"), ("size", "L")]));
        assert_eq!(first_color, urls(&["color.jpg"]));
    }

    #[test]
    fn empty_image_lists_are_skipped() {
        let mut images = VariantImages::new();
        images.insert("color:red", vec![]);
        images.insert("default", urls(&["d.jpg"]));
        let out = resolve(&images, &[], &selection(&[("color", "Red")]));
        assert_eq!(out, urls(&["d.jpg"]));
    }

    #[test]
    fn empty_selection_uses_default_entry() {
        let mut images = VariantImages::new();
        images.insert("default", urls(&["d.jpg"]));
        let out = resolve(&images, &[], &VariantSelection::new());
        assert_eq!(out, urls(&["d.jpg"]));
    }

    #[test]
    fn no_match_anywhere_returns_empty() {
        let mut images = VariantImages::new();
        images.insert("frame:oak", urls(&["oak.jpg"]));
        let out = resolve(&images, &[], &selection(&[("color", "Blue")]));
        assert!(out.is_empty());
    }

    #[test]
    fn generate_key_is_order_independent() {
        let a = generate_key(&selection(&[("color", "Red"), ("size", "L")]));
        let b = generate_key(&selection(&[("size", "L"), ("color", "Red")]));
        assert_eq!(a, b);
        assert_eq!(a, "color:red,size:l");
    }

    #[test]
    fn generate_key_of_empty_selection_is_default() {
        assert_eq!(generate_key(&VariantSelection::new()), DEFAULT_VARIANT_KEY);
    }

    #[test]
    fn generated_keys_round_trip_through_resolution() {
        let sel = selection(&[("material", "Canvas"), ("finish", "Matte")]);
        let mut images = VariantImages::new();
        images.insert(&generate_key(&sel), urls(&["m.jpg"]));
        let out = resolve(&images, &[], &selection(&[("finish", "Matte"), ("material", "Canvas")]));
        assert_eq!(out, urls(&["m.jpg"]));
    }
}
