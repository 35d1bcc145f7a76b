//! Session-scoped conversion history

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use serde::Serialize;
use unitconv_core::Conversion;

use crate::display::format_conversion;

/// One recorded conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub converted: f64,
    /// Display string, e.g. "1.0 Kilometer = 1000.00 Meter"
    pub text: String,
}

impl From<&Conversion> for HistoryEntry {
    fn from(conversion: &Conversion) -> Self {
        HistoryEntry {
            value: conversion.value,
            from_unit: conversion.from_unit.clone(),
            to_unit: conversion.to_unit.clone(),
            converted: conversion.converted,
            text: format_conversion(conversion),
        }
    }
}

/// Append-only log of conversions, in insertion order.
///
/// Nothing is recorded unless `push` is called. Unbounded by default; with
/// a limit, the oldest entries are dropped once it is exceeded.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: Option<NonZeroUsize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` entries, dropping the oldest first
    pub fn with_limit(limit: NonZeroUsize) -> Self {
        History { entries: VecDeque::new(), limit: Some(limit) }
    }

    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    pub fn push(&mut self, conversion: &Conversion) -> &HistoryEntry {
        self.entries.push_back(HistoryEntry::from(conversion));
        if let Some(limit) = self.limit {
            while self.entries.len() > limit.get() {
                self.entries.pop_front();
            }
        }
        // just pushed, so never empty
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> Vec<&HistoryEntry> {
        self.entries.iter().collect()
    }

    /// Display strings, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.text.clone()).collect()
    }
}
