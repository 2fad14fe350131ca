use indexmap::IndexSet;
use tracing::trace;

use crate::core::{Axis, DataPoint, DataValue, Series};

/// Ordered set of category keys in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Categories {
    keys: IndexSet<DataValue>,
}

impl Categories {
    /// Collects distinct keys, keeping the position of each key's first occurrence.
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = DataValue>,
    {
        Self {
            keys: values.into_iter().collect(),
        }
    }

    /// Collects the categories of one axis, scanning series in supplied order.
    #[must_use]
    pub fn collect(series: &[Series], axis: Axis) -> Self {
        Self::from_values(series.iter().flat_map(|item| {
            item.data.iter().map(move |point| match axis {
                Axis::X => point.x.clone(),
                Axis::Y => point.y.clone(),
            })
        }))
    }

    #[must_use]
    pub fn index_of(&self, key: &DataValue) -> Option<usize> {
        self.keys.get_index_of(key)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataValue> {
        self.keys.get_index(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataValue> {
        self.keys.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<DataValue> {
        self.keys.iter().cloned().collect()
    }
}

// `IndexSet` equality ignores order; category order is part of the contract.
impl PartialEq for Categories {
    fn eq(&self, other: &Self) -> bool {
        self.keys.iter().eq(other.keys.iter())
    }
}

impl Eq for Categories {}

/// Series collection aligned on one categorical x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct UnifiedSeries {
    pub categories: Categories,
    pub series: Vec<Series>,
}

/// Aligns every series on a shared categorical x axis.
///
/// Categories are collected in first-seen order across series. A series that
/// lacks a category receives a zero-valued point for it, then each series is
/// reordered by category position. Point order within one category is kept.
#[must_use]
pub fn unify_categories(series: Vec<Series>) -> UnifiedSeries {
    let categories = Categories::collect(&series, Axis::X);

    let series = series
        .into_iter()
        .map(|mut item| {
            let present: IndexSet<&DataValue> = item.data.iter().map(|point| &point.x).collect();
            let missing: Vec<DataValue> = categories
                .iter()
                .filter(|key| !present.contains(key))
                .cloned()
                .collect();
            item.data.extend(missing.into_iter().map(DataPoint::padding));

            item.data.sort_by_key(|point| {
                categories
                    .index_of(&point.x)
                    .unwrap_or(categories.len())
            });
            item
        })
        .collect::<Vec<_>>();

    trace!(
        categories = categories.len(),
        series = series.len(),
        "unified categorical x axis"
    );

    UnifiedSeries { categories, series }
}

#[cfg(test)]
mod tests {
    use super::{Categories, unify_categories};
    use crate::core::{DataPoint, DataValue, Series};

    #[test]
    fn categories_compare_by_order() {
        let ab = Categories::from_values([DataValue::text("a"), DataValue::text("b")]);
        let ba = Categories::from_values([DataValue::text("b"), DataValue::text("a")]);
        assert_ne!(ab, ba);
    }

    #[test]
    fn padding_points_are_zero_valued() {
        let unified = unify_categories(vec![
            Series::bar(vec![DataPoint::new("a", 1.0)]),
            Series::bar(vec![DataPoint::new("b", 2.0)]),
        ]);
        assert_eq!(unified.series[0].data[1], DataPoint::new("b", 0.0));
        assert_eq!(unified.series[1].data[0], DataPoint::new("a", 0.0));
    }
}
