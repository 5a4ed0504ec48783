//! Den eligibility and in-place scaling

use bl2rust_core::host::{Host, ObjectHandle};
use bl2rust_core::sdk::population::factory;
use bl2rust_core::sdk::SpawnCounts;

/// Factory classes marking a den as a shop or prop spawner
///
/// Dens spawning through any of these must never be scaled: multiplying
/// a vending machine is not more action, it is a broken map.
const NON_COMBAT_FACTORIES: [&str; 3] = [
    factory::BLACK_MARKET,
    factory::INTERACTIVE_OBJECT,
    factory::VENDING_MACHINE,
];

/// Scale a den's four spawn caps by `amount`, if the den is eligible
///
/// Ineligible dens (no population definition, empty archetype list, an
/// archetype with no factory, or any denylisted factory) are skipped
/// silently.
pub(crate) fn multiply_den_if_able(host: &mut dyn Host, den: ObjectHandle, amount: f64) {
    let Some(counts) = eligible_counts(&*host, den) else {
        return;
    };
    let scaled = counts.scaled(amount);
    if let Some(den) = host.den_mut(den) {
        den.counts = scaled;
    }
}

fn eligible_counts(host: &dyn Host, den: ObjectHandle) -> Option<SpawnCounts> {
    let den = host.den(den)?;
    let population_def = den.population_def.as_ref()?;
    if population_def.archetypes.is_empty() {
        return None;
    }
    for archetype in &population_def.archetypes {
        let factory = archetype.spawn_factory.as_deref()?;
        if NON_COMBAT_FACTORIES.contains(&factory) {
            return None;
        }
    }
    Some(den.counts)
}
