pub mod api;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod state;
pub mod taxonomy;
pub mod ui;

#[cfg(test)]
pub mod test_support;
