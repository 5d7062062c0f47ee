//! Responsive breakpoints and media resolution

use indexmap::IndexMap;
use lattice_core::{StyleMap, StyleValue};
use smallvec::SmallVec;

/// Named min-width breakpoints, in ascending declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoints {
    map: IndexMap<String, f32>,
}

impl Breakpoints {
    /// Tailwind-compatible defaults (`sm`/`md`/`lg`/`xl`/`2xl`).
    pub fn tailwind() -> Self {
        let mut map = IndexMap::new();
        map.insert("sm".into(), 640.0);
        map.insert("md".into(), 768.0);
        map.insert("lg".into(), 1024.0);
        map.insert("xl".into(), 1280.0);
        map.insert("2xl".into(), 1536.0);
        Self { map }
    }

    pub fn new(entries: impl IntoIterator<Item = (String, f32)>) -> Self {
        Self {
            map: entries.into_iter().collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.map.keys()
    }

    /// The active-flag map for a viewport width.
    pub fn media_state(&self, width: f32) -> MediaState {
        self.map
            .iter()
            .map(|(name, min)| (name.clone(), width >= *min))
            .collect()
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::tailwind()
    }
}

/// Per-render breakpoint activity, in breakpoint declaration order.
pub type MediaState = IndexMap<String, bool>;

/// Which breakpoints a render depends on.
///
/// Array-form values name the exact keys to watch; named-breakpoint objects
/// cannot be narrowed statically and watch everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HasMedia {
    #[default]
    None,
    /// Watch all breakpoints.
    All,
    /// Watch only these breakpoint keys.
    Keys(SmallVec<[String; 4]>),
}

impl HasMedia {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Widen to watch everything. `All` absorbs any key set.
    pub fn set_all(&mut self) {
        *self = Self::All;
    }

    pub fn add_keys(&mut self, keys: impl IntoIterator<Item = String>) {
        match self {
            Self::All => {}
            Self::None => {
                let collected: SmallVec<[String; 4]> = keys.into_iter().collect();
                if !collected.is_empty() {
                    *self = Self::Keys(collected);
                }
            }
            Self::Keys(existing) => {
                for key in keys {
                    if !existing.contains(&key) {
                        existing.push(key);
                    }
                }
            }
        }
    }
}

/// Resolve an array-form responsive value: entry 0 is the base, entry `i`
/// applies when the `i-1`th breakpoint is active, last active entry wins.
/// Returns the resolved value and the breakpoint keys the result depends on.
pub fn resolve_responsive_list(
    values: &[StyleValue],
    breakpoints: &Breakpoints,
    media_state: &MediaState,
) -> (StyleValue, SmallVec<[String; 4]>) {
    let mut resolved = values.first().cloned().unwrap_or(StyleValue::Bool(false));
    let mut keys = SmallVec::new();

    for (i, name) in breakpoints.names().take(values.len().saturating_sub(1)).enumerate() {
        keys.push(name.clone());
        if media_state.get(name).copied().unwrap_or(false) {
            resolved = values[i + 1].clone();
        }
    }
    (resolved, keys)
}

/// Whether a map value is a named-breakpoint object (`{base: 1, lg: 2}`).
pub fn is_breakpoint_object(map: &StyleMap, breakpoints: &Breakpoints) -> bool {
    !map.is_empty()
        && map
            .keys()
            .all(|key| key == "base" || breakpoints.contains(key))
}

/// Resolve a named-breakpoint object: start from `base`, then apply entries
/// in breakpoint declaration order wherever active.
pub fn resolve_responsive_map(
    map: &StyleMap,
    breakpoints: &Breakpoints,
    media_state: &MediaState,
) -> Option<StyleValue> {
    let mut resolved = map.get("base").cloned();
    for name in breakpoints.names() {
        if media_state.get(name).copied().unwrap_or(false) {
            if let Some(value) = map.get(name.as_str()) {
                resolved = Some(value.clone());
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_state_marks_active_breakpoints() {
        let bp = Breakpoints::tailwind();
        let state = bp.media_state(800.0);
        assert_eq!(state["sm"], true);
        assert_eq!(state["md"], true);
        assert_eq!(state["lg"], false);
    }

    #[test]
    fn list_resolution_last_active_wins() {
        let bp = Breakpoints::tailwind();
        let state = bp.media_state(800.0);
        let values = vec![
            StyleValue::from(8),
            StyleValue::from(12),
            StyleValue::from(16),
        ];
        let (resolved, keys) = resolve_responsive_list(&values, &bp, &state);
        // sm and md active; md entry wins.
        assert_eq!(resolved, StyleValue::Number(16.0));
        assert_eq!(keys.to_vec(), vec!["sm", "md"]);
    }

    #[test]
    fn map_resolution_falls_back_to_base() {
        let bp = Breakpoints::tailwind();
        let narrow = bp.media_state(320.0);
        let mut map = StyleMap::new();
        map.insert("base".into(), StyleValue::from(4));
        map.insert("lg".into(), StyleValue::from(24));

        assert_eq!(
            resolve_responsive_map(&map, &bp, &narrow),
            Some(StyleValue::Number(4.0))
        );
        assert_eq!(
            resolve_responsive_map(&map, &bp, &bp.media_state(1200.0)),
            Some(StyleValue::Number(24.0))
        );
    }

    #[test]
    fn breakpoint_object_detection() {
        let bp = Breakpoints::tailwind();
        let mut media = StyleMap::new();
        media.insert("base".into(), StyleValue::from(1));
        media.insert("lg".into(), StyleValue::from(2));
        assert!(is_breakpoint_object(&media, &bp));

        let mut pseudo = StyleMap::new();
        pseudo.insert("borderColor".into(), StyleValue::from("red"));
        assert!(!is_breakpoint_object(&pseudo, &bp));
    }

    #[test]
    fn has_media_all_absorbs_keys() {
        let mut has = HasMedia::None;
        has.add_keys(vec!["sm".to_string()]);
        assert_eq!(has, HasMedia::Keys(SmallVec::from_vec(vec!["sm".into()])));
        has.set_all();
        has.add_keys(vec!["lg".to_string()]);
        assert_eq!(has, HasMedia::All);
    }
}
