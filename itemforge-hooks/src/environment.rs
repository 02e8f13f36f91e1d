use std::collections::HashSet;

/// Tells the registry which external systems are installed.
pub trait Environment {
    fn is_present(&self, id: &str) -> bool;
}

impl<F> Environment for F
where
    F: Fn(&str) -> bool,
{
    fn is_present(&self, id: &str) -> bool {
        self(id)
    }
}

/// A fixed set of installed plugin ids, compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct PresentPlugins(HashSet<String>);

impl PresentPlugins {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            ids.into_iter()
                .map(|id| id.as_ref().to_lowercase())
                .collect(),
        )
    }
}

impl Environment for PresentPlugins {
    fn is_present(&self, id: &str) -> bool {
        self.0.contains(&id.to_lowercase())
    }
}
