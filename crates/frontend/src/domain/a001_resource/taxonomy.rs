//! Derived filter options.
//!
//! Built once from the loaded snapshot and never mutated afterwards; the
//! controller asks it for the option lists matching the current selection.

use contracts::domain::a001_resource::{CategoryLevel, Item};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Порядок годов: новые сверху.
///
/// Целые числа сравниваются численно и идут раньше нечисловых значений;
/// нечисловые сравниваются лексикографически (тоже по убыванию).
pub fn compare_years(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(x), Ok(y)) => y.cmp(&x),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => b.cmp(a),
    }
}

fn sorted_years(years: BTreeSet<String>) -> Vec<String> {
    let mut years: Vec<String> = years.into_iter().collect();
    years.sort_by(|a, b| compare_years(a, b));
    years
}

/// Make → Model → Year option graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryIndex {
    makes: Vec<String>,
    models_by_make: BTreeMap<String, Vec<String>>,
    years_by_model: BTreeMap<String, Vec<String>>,
}

impl CategoryIndex {
    /// Один проход по всем путям всех элементов.
    ///
    /// Путь длины ≥1 добавляет марку, ≥2, модель под маркой,
    /// ≥3, год под моделью.
    pub fn build(items: &[Item]) -> Self {
        let mut makes: BTreeSet<String> = BTreeSet::new();
        let mut models_by_make: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut years_by_model: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for path in items.iter().flat_map(|item| item.tags.paths()) {
            let Some(make) = path.name(CategoryLevel::Make) else {
                continue;
            };
            makes.insert(make.to_string());

            let Some(model) = path.name(CategoryLevel::Model) else {
                continue;
            };
            models_by_make
                .entry(make.to_string())
                .or_default()
                .insert(model.to_string());

            if let Some(year) = path.name(CategoryLevel::Year) {
                years_by_model
                    .entry(model.to_string())
                    .or_default()
                    .insert(year.to_string());
            }
        }

        Self {
            makes: makes.into_iter().collect(),
            models_by_make: models_by_make
                .into_iter()
                .map(|(make, models)| (make, models.into_iter().collect()))
                .collect(),
            years_by_model: years_by_model
                .into_iter()
                .map(|(model, years)| (model, sorted_years(years)))
                .collect(),
        }
    }

    pub fn makes(&self) -> &[String] {
        &self.makes
    }

    /// Модели выбранной марки; без выбора: объединение по всем маркам
    pub fn model_options_for(&self, selected_make: Option<&str>) -> Vec<String> {
        if let Some(models) = selected_make.and_then(|m| self.models_by_make.get(m)) {
            return models.clone();
        }
        self.models_by_make
            .values()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Годы выбранной модели; без выбора: объединение по всем моделям
    pub fn year_options_for(&self, selected_model: Option<&str>) -> Vec<String> {
        if let Some(years) = selected_model.and_then(|m| self.years_by_model.get(m)) {
            return years.clone();
        }
        sorted_years(
            self.years_by_model
                .values()
                .flatten()
                .cloned()
                .collect::<BTreeSet<_>>(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.makes.is_empty()
    }
}

/// Independent per-axis value sets (flat taxonomies).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisIndex {
    values_by_axis: BTreeMap<String, Vec<String>>,
}

impl AxisIndex {
    pub fn build(items: &[Item], axes: &[String]) -> Self {
        let mut values_by_axis: BTreeMap<String, BTreeSet<String>> = axes
            .iter()
            .map(|axis| (axis.clone(), BTreeSet::new()))
            .collect();

        for item in items {
            for (axis, values) in values_by_axis.iter_mut() {
                values.extend(item.tags.axis(axis).iter().map(|n| n.name.clone()));
            }
        }

        Self {
            values_by_axis: values_by_axis
                .into_iter()
                .map(|(axis, values)| (axis, values.into_iter().collect()))
                .collect(),
        }
    }

    pub fn values(&self, axis: &str) -> &[String] {
        self.values_by_axis
            .get(axis)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Индекс опций фильтров для выбранного режима таксономии
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOptionIndex {
    Hierarchical(CategoryIndex),
    Flat(AxisIndex),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_resource::test_support::{flat_item, item};

    fn catalog() -> Vec<Item> {
        vec![
            item(1, "A", &[&["Toyota", "Corolla", "2020"], &["Toyota", "Camry", "2019"]]),
            item(2, "B", &[&["Honda", "Civic", "2021"], &["Toyota", "Camry", "2022"]]),
            item(3, "C", &[&["Ford", "Focus"], &["BMW"]]),
        ]
    }

    #[test]
    fn test_makes_are_sorted() {
        let index = CategoryIndex::build(&catalog());
        assert_eq!(index.makes(), &["BMW", "Ford", "Honda", "Toyota"]);
    }

    #[test]
    fn test_models_cascade_from_make() {
        let index = CategoryIndex::build(&catalog());
        assert_eq!(index.model_options_for(Some("Toyota")), vec!["Camry", "Corolla"]);
        assert_eq!(index.model_options_for(Some("Ford")), vec!["Focus"]);
        // марка без моделей, показываем все
        assert_eq!(
            index.model_options_for(Some("BMW")),
            vec!["Camry", "Civic", "Corolla", "Focus"]
        );
        assert_eq!(
            index.model_options_for(None),
            vec!["Camry", "Civic", "Corolla", "Focus"]
        );
    }

    #[test]
    fn test_years_cascade_from_model() {
        let index = CategoryIndex::build(&catalog());
        assert_eq!(index.year_options_for(Some("Camry")), vec!["2022", "2019"]);
        assert_eq!(
            index.year_options_for(None),
            vec!["2022", "2021", "2020", "2019"]
        );
        // путь без года не создаёт связей
        assert_eq!(
            index.year_options_for(Some("Focus")),
            vec!["2022", "2021", "2020", "2019"]
        );
    }

    #[test]
    fn test_compare_years() {
        let mut years = vec!["2019", "1999-2003", "2021", "classic", "987"];
        years.sort_by(|a, b| compare_years(a, b));
        assert_eq!(years, vec!["2021", "2019", "987", "classic", "1999-2003"]);
    }

    #[test]
    fn test_axis_index() {
        let items = vec![
            flat_item(1, "A", &[("year", &["2020", "2018"]), ("model", &["Civic"])]),
            flat_item(2, "B", &[("year", &["2019"])]),
        ];
        let axes = vec!["year".to_string(), "model".to_string()];
        let index = AxisIndex::build(&items, &axes);
        assert_eq!(index.values("year"), &["2018", "2019", "2020"]);
        assert_eq!(index.values("model"), &["Civic"]);
        assert!(index.values("make").is_empty());
    }

    #[test]
    fn test_empty_snapshot() {
        let index = CategoryIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.model_options_for(None).is_empty());
        assert!(index.year_options_for(Some("Camry")).is_empty());
    }
}
