//! Slot bindings and the display writer.
//!
//! A *slot* is a display element bound to exactly one metric. Bindings are an
//! explicit table built once at startup: either declared directly
//! ([`SlotBindings::new`]) or recovered from legacy element identifiers of
//! the form `<prefix>_<index>` ([`SlotBindings::discover`]).
//!
//! The writer runs one pass per snapshot. Unavailable values leave a slot's
//! prior text untouched; available ones are written with the unit suffix
//! (the is-GSM flag excepted). A slot whose metric lies beyond a short
//! snapshot is skipped with an error log — some radios report fewer fields
//! than the schema names.

use crate::config::DisplayConfig;
use crate::metric::Metric;
use crate::snapshot::{FieldValue, SignalSnapshot};

/// A display element the writer can set text on.
pub trait DisplaySlot {
    fn set_text(&mut self, text: &str);
}

/// A display element carrying an optional string identifier, used by
/// convention-based discovery.
pub trait TaggedSlot: DisplaySlot {
    /// Element identifier, if the element has one.
    fn identifier(&self) -> Option<&str>;
}

/// Explicit metric-to-slot table.
pub struct SlotBindings<S: DisplaySlot> {
    entries: Vec<(Metric, S)>,
}

impl<S: DisplaySlot> SlotBindings<S> {
    /// Build a binding table from declared (metric, slot) pairs.
    pub fn new(pairs: impl IntoIterator<Item = (Metric, S)>) -> SlotBindings<S> {
        SlotBindings {
            entries: pairs.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &S)> {
        self.entries.iter().map(|(m, s)| (*m, s))
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = (Metric, &mut S)> {
        self.entries.iter_mut().map(|(m, s)| (*m, s))
    }
}

impl<S: TaggedSlot> SlotBindings<S> {
    /// Recover bindings from elements whose identifiers follow the
    /// `<prefix>_<index>` convention (`signal_9` binds the metric at
    /// position 9). Elements without an identifier, or whose identifier does
    /// not match the convention, are skipped with a debug note.
    pub fn discover(elements: impl IntoIterator<Item = S>) -> SlotBindings<S> {
        let mut entries = Vec::new();
        for element in elements {
            let Some(id) = element.identifier() else {
                log::debug!("skipping element with no identifier");
                continue;
            };
            let Some((_, suffix)) = id.split_once('_') else {
                log::debug!("skipping element {:?}: no index suffix", id);
                continue;
            };
            let Some(metric) = suffix.parse::<usize>().ok().and_then(Metric::from_index) else {
                log::debug!("skipping element {:?}: suffix is not a metric index", id);
                continue;
            };
            entries.push((metric, element));
        }
        log::debug!("discovered {} slot bindings", entries.len());
        SlotBindings { entries }
    }
}

/// Writes sanitized snapshot values into bound slots.
pub struct ScreenWriter {
    unit_suffix: String,
}

impl ScreenWriter {
    pub fn new(config: &DisplayConfig) -> ScreenWriter {
        ScreenWriter {
            unit_suffix: config.unit_suffix.clone(),
        }
    }

    /// Run one display pass. Returns the number of slots updated.
    pub fn write<S: DisplaySlot>(
        &self,
        snapshot: &SignalSnapshot,
        bindings: &mut SlotBindings<S>,
    ) -> usize {
        let mut updated = 0;

        for (metric, slot) in bindings.iter_mut() {
            let value = if metric.is_derived() {
                snapshot.rssi()
            } else {
                match snapshot.field_checked(metric) {
                    Ok(value) => value,
                    Err(e) => {
                        // Known OEM quirk: some radios serialize fewer
                        // fields than the schema names.
                        log::error!("{} for {}", e, metric.label());
                        continue;
                    }
                }
            };

            let FieldValue::Value(v) = value else {
                // Unavailable: leave whatever the slot showed before.
                continue;
            };

            let text = match metric.unit() {
                Some(_) => format!("{}{}", v, self.unit_suffix),
                None => v.to_string(),
            };
            log::debug!("{} -> {:?}", metric.label(), text);
            slot.set_text(&text);
            updated += 1;
        }

        updated
    }
}
