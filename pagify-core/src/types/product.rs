//! 商品列表适配

use pagify_api::{Product, ProductStatus};

use crate::list_view::Listable;

impl Listable for Product {
    type Status = ProductStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        let mut text = format!("{} {}", self.id, self.title);
        for extra in [&self.author, &self.seller].into_iter().flatten() {
            text.push(' ');
            text.push_str(extra);
        }
        text
    }

    fn status(&self) -> ProductStatus {
        self.status
    }

    fn all_statuses() -> &'static [ProductStatus] {
        ProductStatus::all()
    }
}
