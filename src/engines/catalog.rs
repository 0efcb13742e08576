//! Ordered, immutable engine catalog

use super::engine::Engine;

/// Ordered list of selectable engines
///
/// Position in the catalog is the selection index, so the order given at
/// construction is preserved exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    engines: Vec<Engine>,
}

impl Catalog {
    /// Create a catalog from engines in index order
    pub fn new(engines: Vec<Engine>) -> Self {
        Self { engines }
    }

    /// Get an engine by index
    pub fn get(&self, index: usize) -> Option<&Engine> {
        self.engines.get(index)
    }

    /// Get the index of an engine by id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.engines.iter().position(|e| e.id == id)
    }

    /// Check if an index addresses an engine
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.engines.len()
    }

    /// Get all display names in index order
    pub fn names(&self) -> Vec<&str> {
        self.engines.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Engine> {
        self.engines.iter()
    }

    /// Get number of engines
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = Engine;

    fn index(&self, index: usize) -> &Engine {
        &self.engines[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Engine;
    type IntoIter = std::slice::Iter<'a, Engine>;

    fn into_iter(self) -> Self::IntoIter {
        self.engines.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(default_engines())
    }
}

/// Built-in engines, in selection index order
fn default_engines() -> Vec<Engine> {
    vec![
        Engine::new("baidu", "百度", "https://www.baidu.com/s?wd={query}"),
        Engine::new("google", "谷歌", "https://www.google.com/search?q={query}"),
        Engine::new("bing", "必应", "https://www.bing.com/search?q={query}"),
        Engine::new("sogou", "搜狗", "https://www.sogou.com/web?query={query}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 4);
        let ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["baidu", "google", "bing", "sogou"]);
        assert_eq!(catalog.names(), ["百度", "谷歌", "必应", "搜狗"]);
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::default();
        assert_eq!(catalog.position("bing"), Some(2));
        assert_eq!(catalog.position("sogou").map(|i| catalog[i].name.as_str()), Some("搜狗"));
        assert!(catalog.position("yahoo").is_none());
        assert!(catalog.contains_index(3));
        assert!(!catalog.contains_index(4));
        assert!(catalog.get(4).is_none());
    }

    #[test]
    fn test_every_template_has_placeholder() {
        for engine in &Catalog::default() {
            assert_eq!(
                engine.url_template.matches(crate::engines::QUERY_PLACEHOLDER).count(),
                1,
                "{}",
                engine.id
            );
        }
    }
}
