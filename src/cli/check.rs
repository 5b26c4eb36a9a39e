use std::path::Path;

use crate::config::CardFile;
use crate::error::Result;
use crate::harness::DemoHarness;

/// Validate a card file: every card must parse and ids must be unique.
pub fn check_card_file(path: &Path) -> Result<()> {
    let file = CardFile::load(path)?;
    let harness = DemoHarness::new(file.cards)?;
    let cards = harness.snapshot().cards();
    let selectable = cards.iter().filter(|c| c.is_selectable()).count();

    tracing::debug!(path = %path.display(), cards = cards.len(), "card file valid");
    println!(
        "✓ {}: {} cards ({} selectable)",
        path.display(),
        cards.len(),
        selectable
    );
    Ok(())
}
