use crate::shared::{contains_ci, Searchable};
use serde::{Deserialize, Serialize};

/// Catalog item from the office-supplies vendor.
///
/// `price` is a plain KRW integer; there is no currency abstraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyItem {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "externalUrl")]
    pub external_url: String,
    pub supplier: String,
    pub price: u32,
}

impl Searchable for SupplyItem {
    fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
    }
}

/// One line of the supplies cart, keyed by [`SupplyItem::id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub qty: u32,
    pub price: u32,
}

impl CartLine {
    pub fn line_total(&self) -> u64 {
        self.qty as u64 * self.price as u64
    }
}

/// Quantity accumulator backing the supplies request page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the quantity when the item is already in the cart,
    /// otherwise insert a new line with qty 1.
    pub fn add(&mut self, item: &SupplyItem) {
        match self.lines.iter_mut().find(|l| l.id == item.id) {
            Some(line) => line.qty += 1,
            None => self.lines.push(CartLine {
                id: item.id.clone(),
                name: item.name.clone(),
                qty: 1,
                price: item.price,
            }),
        }
    }

    /// Apply a quantity delta, clamped so a line never drops below 1.
    /// Lines leave the cart only through [`Cart::remove`].
    pub fn bump_qty(&mut self, id: &str, delta: i32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.qty = (line.qty as i64 + delta as i64).max(1) as u32;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|l| l.id != id);
    }

    /// Σ qty × price over all lines, in KRW.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn qty_of(&self, id: &str) -> Option<u32> {
        self.lines.iter().find(|l| l.id == id).map(|l| l.qty)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: u32) -> SupplyItem {
        SupplyItem {
            id: id.into(),
            name: format!("품목 {id}"),
            category: "기타".into(),
            external_url: String::new(),
            supplier: "오피스 디포".into(),
            price,
        }
    }

    #[test]
    fn adding_the_same_item_twice_yields_one_line_with_qty_2() {
        let mut cart = Cart::new();
        let a4 = item("s1", 25_000);
        cart.add(&a4);
        cart.add(&a4);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.qty_of("s1"), Some(2));
    }

    #[test]
    fn total_is_sum_of_qty_times_price() {
        let mut cart = Cart::new();
        cart.add(&item("s1", 25_000));
        cart.add(&item("s1", 25_000));
        cart.add(&item("s2", 800));
        assert_eq!(cart.total(), 2 * 25_000 + 800);
    }

    #[test]
    fn bump_qty_never_drops_below_one() {
        let mut cart = Cart::new();
        cart.add(&item("s1", 25_000));
        cart.bump_qty("s1", -100);
        assert_eq!(cart.qty_of("s1"), Some(1));
        cart.bump_qty("s1", 3);
        assert_eq!(cart.qty_of("s1"), Some(4));
        // Unknown id is a no-op.
        cart.bump_qty("s9", 1);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn remove_deletes_the_line() {
        let mut cart = Cart::new();
        cart.add(&item("s1", 25_000));
        cart.add(&item("s2", 800));
        cart.remove("s1");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.qty_of("s1"), None);
        assert_eq!(cart.total(), 800);
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(Cart::new().total(), 0);
        assert!(Cart::new().is_empty());
    }
}
