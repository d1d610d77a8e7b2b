use crate::domain::inventory::Inventory;
use crate::error::Result;

/// Loads a complete inventory snapshot. A failed load yields no partial data.
pub trait InventorySource: Send + Sync {
    fn load(&self) -> Result<Inventory>;
}
