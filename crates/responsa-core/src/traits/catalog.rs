use crate::catalog::Category;

/// Read-only lookup of a category's question/answer list.
///
/// Catalog mutation belongs to the management collaborator and is never
/// reentrant with resolution.
pub trait ICatalog: Send + Sync {
    /// Fetch a category by name, compared case-insensitively.
    fn category(&self, name: &str) -> Option<Category>;

    /// Names of all categories, in catalog order.
    fn category_names(&self) -> Vec<String>;
}
