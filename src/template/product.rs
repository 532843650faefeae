use askama::Template;

use crate::catalog::ProductRecord;

use super::Snackbar;

/// Inline presentation rules emitted with every page.
pub const STYLESHEET: &str = r#"
    .snackbar {
      margin-bottom: 20px;
      padding: 12px 16px;
      background-color: #fdecea;
    }
    .table-container {
      margin-bottom: 40px;
      overflow-x: auto;
    }
    table {
      width: 100%;
      border-collapse: collapse;
    }
    th, td {
      border: 1px solid #ddd;
      padding: 8px;
      text-align: left;
      vertical-align: middle;
    }
    th {
      background-color: #f2f2f2;
    }
    td img {
      max-width: 50px;
      height: auto;
      display: block;
      margin: auto;
    }
    .card-container {
      display: flex;
      flex-wrap: wrap;
      gap: 20px;
      justify-content: center;
      padding: 20px 0;
    }
    .card {
      border: 1px solid #ccc;
      border-radius: 8px;
      padding: 16px;
      width: 280px;
      box-shadow: 0 2px 4px rgba(0,0,0,0.1);
      display: flex;
      flex-direction: column;
      align-items: center;
    }
    .card img {
      width: 100%;
      height: 220px;
      object-fit: contain;
      margin-bottom: 12px;
    }
    .card h3 {
      font-size: 1.1rem;
      margin-bottom: 8px;
      text-align: center;
      height: 2.6em;
      overflow: hidden;
      display: -webkit-box;
      -webkit-line-clamp: 2;
      -webkit-box-orient: vertical;
    }
    .card p {
      margin: 4px 0;
      color: #555;
      font-size: 0.9rem;
    }
    .card .price {
      font-weight: bold;
      color: #000;
      font-size: 1.25rem;
      margin-top: 8px;
    }
    .card .rating {
      color: #e67e22;
      font-weight: 500;
    }
"#;

#[derive(Template)]
#[template(path = "product_table.html")]
pub struct ProductTable<'a> {
    pub products: &'a [ProductRecord],
}

#[derive(Template)]
#[template(path = "product_cards.html")]
pub struct ProductCards<'a> {
    pub products: &'a [ProductRecord],
}

#[derive(Template)]
#[template(path = "product_page.html")]
pub struct ProductPage<'a> {
    pub stylesheet: &'a str,
    pub notice: Option<Snackbar<'a>>,
    pub table: ProductTable<'a>,
    pub cards: ProductCards<'a>,
}

impl<'a> ProductPage<'a> {
    pub fn new(products: &'a [ProductRecord], notice: Option<Snackbar<'a>>) -> Self {
        ProductPage {
            stylesheet: STYLESHEET,
            notice,
            table: ProductTable { products },
            cards: ProductCards { products },
        }
    }
}

pub fn render_table(products: &[ProductRecord]) -> askama::Result<String> {
    ProductTable { products }.render()
}

pub fn render_cards(products: &[ProductRecord]) -> askama::Result<String> {
    ProductCards { products }.render()
}

/// Full document with both views over the same records, in input order.
pub fn render_page(
    products: &[ProductRecord],
    notice: Option<Snackbar<'_>>,
) -> askama::Result<String> {
    ProductPage::new(products, notice).render()
}

#[cfg(test)]
mod test {
    use crate::catalog::Rating;

    use super::*;

    fn record(id: u64, title: &str, price: f64) -> ProductRecord {
        ProductRecord {
            id,
            title: title.to_owned(),
            price,
            description: "unused".to_owned(),
            category: "electronics".to_owned(),
            image: format!("https://example.com/{id}.png"),
            rating: Rating {
                rate: 4.2,
                count: 38,
            },
        }
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("{needle} missing"))
    }

    #[test]
    fn test_table_row_per_record() {
        let products: Vec<ProductRecord> = vec![
            record(1, "Monitor", 9.0),
            record(2, "Keyboard", 10.5),
            record(3, "Mouse", 7.99),
        ];
        let html: String = render_table(&products).unwrap();

        assert_eq!(3, html.matches(r#"<tr class="product-row""#).count());
        assert!(html.contains("<td>$9.00</td>"));
        assert!(html.contains("<td>$10.50</td>"));
        assert!(html.contains("<td>$7.99</td>"));
        assert!(html.contains("<td>4.2 ★</td>"));
        assert!(html.contains("<td>38</td>"));
    }

    #[test]
    fn test_card_per_record() {
        let products: Vec<ProductRecord> =
            vec![record(1, "Monitor", 9.0), record(2, "Keyboard", 10.5)];
        let html: String = render_cards(&products).unwrap();

        assert_eq!(2, html.matches(r#"<div class="card" "#).count());
        assert!(html.contains("<h3>Monitor</h3>"));
        assert!(html.contains(r#"<p class="price">$10.50</p>"#));
        assert!(html.contains(r#"<p class="rating">4.2 ★ (38 reviews)</p>"#));
        assert!(!html.contains("unused"));
    }

    #[test]
    fn test_page_keeps_input_order() {
        let products: Vec<ProductRecord> = vec![
            record(3, "Third", 1.0),
            record(1, "First", 1.0),
            record(2, "Second", 1.0),
        ];
        let html: String = render_page(&products, None).unwrap();
        let split: usize = position(&html, "<h2>Product Cards</h2>");
        let (table, cards) = html.split_at(split);

        for view in [table, cards] {
            let third: usize = position(view, r#"data-id="3""#);
            let first: usize = position(view, r#"data-id="1""#);
            let second: usize = position(view, r#"data-id="2""#);
            assert!(third < first && first < second);
        }
    }

    #[test]
    fn test_page_empty_input() {
        let html: String = render_page(&[], None).unwrap();

        assert!(html.contains("<th>ID</th>"));
        assert!(html.contains("<th>Stock (Count)</th>"));
        assert!(html.contains(r#"<div class="card-container">"#));
        assert_eq!(0, html.matches(r#"<tr class="product-row""#).count());
        assert_eq!(0, html.matches(r#"<div class="card" "#).count());
        assert!(!html.contains(r#"class="snackbar""#));
    }

    #[test]
    fn test_page_embeds_stylesheet() {
        let html: String = render_page(&[], None).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("-webkit-line-clamp: 2;"));
        assert!(html.contains("<h1>Product Showcase</h1>"));
    }

    #[test]
    fn test_page_with_notice() {
        let html: String = render_page(&[], Some(Snackbar::fetch_failed())).unwrap();

        assert!(html.contains(r#"class="snackbar""#));
        assert!(html.contains("Could not load products"));
        assert!(html.contains("<th>ID</th>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html: String = render_table(&[record(1, "<b>Bold</b>", 1.0)]).unwrap();

        assert!(!html.contains("<b>Bold</b>"));
        assert!(html.contains("&lt;b&gt;Bold"));
    }
}
