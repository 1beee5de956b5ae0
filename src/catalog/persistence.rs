use std::fs;
use std::path::Path;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::FoodItem;

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Load raw food records from a JSON or CSV file (chosen by extension).
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let path = path.as_ref();

    if is_csv(path) {
        let mut reader = csv::Reader::from_path(path)?;
        let mut items: Vec<FoodItem> = Vec::new();
        for record in reader.deserialize() {
            items.push(record?);
        }
        return Ok(items);
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load and validate a catalog file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let catalog = FoodCatalog::new(load_items(path)?)?;
    tracing::info!(path = %path.display(), foods = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Save food records to a JSON or CSV file (chosen by extension).
pub fn save_items<P: AsRef<Path>>(path: P, items: &[FoodItem]) -> Result<()> {
    let path = path.as_ref();

    if is_csv(path) {
        let mut writer = csv::Writer::from_path(path)?;
        for item in items {
            writer.serialize(item)?;
        }
        writer.flush()?;
        return Ok(());
    }

    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}
