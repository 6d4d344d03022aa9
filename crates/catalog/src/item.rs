use crate::category::Category;

/// A record of a catalog, as seen by the filtering engine.
///
/// Implemented by [`BlogPost`](crate::BlogPost) and [`Project`](crate::Project). The engine only ever
/// reads through this trait, so any other record shape can be filtered by implementing it.
pub trait CatalogItem {
    type Category: Category;

    /// Unique within its catalog, assigned when the catalog is authored.
    fn id(&self) -> u32;

    fn title(&self) -> &str;

    /// Short text shown under the title. Searched along with the title.
    fn summary(&self) -> &str;

    fn category(&self) -> Self::Category;

    /// Whether the item belongs to the featured slice of its catalog.
    fn is_featured(&self) -> bool {
        false
    }
}
