//! PostgREST query strings.
//!
//! The ward only needs three read features: a `select` list with optional
//! relation embedding, one `order` column and `eq` filters. `TableQuery`
//! renders exactly those as URL query pairs:
//!
//! ```text
//! select=*,doctors(ad_soyad)
//! hasta_id=eq.7d0b7f4e-...
//! order=created_at.desc
//! ```

use url::Url;

/// Sort direction for the single `order` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// A read (or filter-scoped write) against one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table: &'static str,
    select: String,
    filters: Vec<(String, String)>,
    order: Option<(String, Direction)>,
}

impl TableQuery {
    /// Start a query on `table` selecting every column.
    pub fn on(table: &'static str) -> Self {
        Self {
            table,
            select: "*".to_string(),
            filters: Vec::new(),
            order: None,
        }
    }

    /// Replace the select list, e.g. `*,doctors(ad_soyad)`.
    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.to_string();
        self
    }

    /// Add an equality filter `column=eq.value`.
    pub fn eq(mut self, column: &str, value: impl std::fmt::Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// Order by one column. A later call replaces an earlier one.
    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    /// The query pairs in the order they are sent.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.select.clone())];
        pairs.extend(self.filters.iter().cloned());
        if let Some((column, direction)) = &self.order {
            pairs.push(("order".to_string(), format!("{column}.{}", direction.as_str())));
        }
        pairs
    }

    /// Append the query pairs to `url`.
    pub fn apply(&self, url: &mut Url) {
        let mut query = url.query_pairs_mut();
        for (key, value) in self.pairs() {
            query.append_pair(&key, &value);
        }
    }
}
