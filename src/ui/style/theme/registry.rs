use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::{Theme, ThemeDefinition};

#[derive(Debug, Default)]
struct ThemeRegistry {
	canonical: BTreeMap<String, ThemeDefinition>,
	aliases: HashMap<String, String>,
}

impl ThemeRegistry {
	fn register(&mut self, definition: ThemeDefinition) {
		let normalized = normalize_name(definition.name);
		for alias in definition.aliases {
			let alias = normalize_name(alias);
			if alias != normalized {
				self.aliases.insert(alias, normalized.clone());
			}
		}
		self.canonical.insert(normalized, definition);
	}

	fn get(&self, name: &str) -> Option<Theme> {
		let normalized = normalize_name(name);

		if let Some(definition) = self.canonical.get(&normalized) {
			return Some(definition.theme);
		}

		let target = self.aliases.get(&normalized)?;
		self.canonical.get(target).map(|definition| definition.theme)
	}
}

fn registry() -> &'static ThemeRegistry {
	static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();
	REGISTRY.get_or_init(|| {
		let mut registry = ThemeRegistry::default();
		for definition in BUILT_IN_DEFINITIONS {
			registry.register(*definition);
		}
		registry
	})
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registry().get(name)
}

/// Canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	registry()
		.canonical
		.values()
		.map(|definition| definition.name)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ui::style::theme::{LIGHT, SLATE};

	#[test]
	fn builtin_themes_are_registered() {
		assert_eq!(names(), ["light", "slate", "solarized"]);
		assert_eq!(by_name("slate"), Some(SLATE));
	}

	#[test]
	fn lookup_is_case_insensitive_and_follows_aliases() {
		assert_eq!(by_name("  LIGHT "), Some(LIGHT));
		assert_eq!(by_name("Dark"), Some(SLATE));
		assert!(by_name("neon").is_none());
	}
}
