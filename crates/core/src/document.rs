//! The content document: one shared record edited by the owner and rendered
//! to visitors.
//!
//! The document is serialized as camelCase JSON, matching the wire shape the
//! remote store holds. It is only ever replaced wholesale or reconciled over
//! defaults on read; it is never partially patched on the remote side.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{
    GalleryItemId, OrderId, OrderStatus, PostId, ProductId, SkillId, SocialLinkId, Theme,
};

/// An external profile link (GitHub, LinkedIn, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub id: SocialLinkId,
    pub platform: String,
    pub url: String,
}

/// A blog post teaser shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
}

/// A single image in the gallery section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: GalleryItemId,
    pub image: String,
    pub title: String,
}

/// A named skill badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
}

/// The owner-maintained notice banner.
///
/// `updated_at` moves only when the owner changes `text`; visitor writes
/// (order submissions) never touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub text: String,
    pub updated_at: DateTime<Utc>,
}

impl Default for Notice {
    fn default() -> Self {
        Self {
            text: String::new(),
            updated_at: DateTime::UNIX_EPOCH,
        }
    }
}

/// A product offered in the shop section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Serialized as a string on the wire (the remote document stores
    /// amounts as strings).
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
    pub image: String,
}

/// An order submitted by a visitor.
///
/// Product name and image are captured at order time and never re-derived,
/// so the order survives later edits or removal of the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub product_id: ProductId,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
    pub customer_name: String,
    pub customer_contact: String,
    pub customer_country: String,
    pub timestamp: DateTime<Utc>,
    pub status: OrderStatus,
}

/// The single shared content document.
///
/// Every field defined here is always present in an active document; a remote
/// or cached value missing fields is completed from [`Document::default`]
/// during reconciliation (see [`crate::merge`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub current_work: String,
    pub profile_image: String,
    pub about_text: String,
    pub email: String,
    pub phone: String,
    pub theme: Theme,

    // Per-section visibility flags
    pub show_about: bool,
    pub show_skills: bool,
    pub show_blog: bool,
    pub show_gallery: bool,
    pub show_contact: bool,
    pub show_clock: bool,
    pub show_notice: bool,
    pub show_work: bool,
    pub show_products: bool,

    pub social_links: Vec<SocialLink>,
    pub posts: Vec<Post>,
    pub gallery: Vec<GalleryItem>,
    pub skills: Vec<Skill>,
    pub notice: Notice,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

impl Document {
    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up an order by ID.
    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }
}

impl Default for Document {
    /// The schema defaults: the document a first-ever run starts from.
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            title: "Professional Web Developer".to_string(),
            bio: "I am an experienced web developer and designer. I love learning new \
                  things and creating great digital solutions."
                .to_string(),
            current_work: String::new(),
            profile_image: "https://picsum.photos/400/400".to_string(),
            about_text: "Write details about yourself here. Discuss your work style, \
                         goals, and experience."
                .to_string(),
            email: "example@mail.com".to_string(),
            phone: "+880 1234 567 890".to_string(),
            theme: Theme::default(),

            show_about: true,
            show_skills: true,
            show_blog: true,
            show_gallery: true,
            show_contact: true,
            show_clock: true,
            show_notice: true,
            show_work: true,
            show_products: true,

            social_links: vec![
                SocialLink {
                    id: SocialLinkId::new("1"),
                    platform: "GitHub".to_string(),
                    url: "https://github.com".to_string(),
                },
                SocialLink {
                    id: SocialLinkId::new("2"),
                    platform: "LinkedIn".to_string(),
                    url: "https://linkedin.com".to_string(),
                },
            ],
            posts: vec![
                Post {
                    id: PostId::new("1"),
                    title: "Blog Post 1".to_string(),
                    description: "Write a summary of your first blog post here.".to_string(),
                    image: "https://picsum.photos/600/400?random=1".to_string(),
                    link: "#".to_string(),
                },
                Post {
                    id: PostId::new("2"),
                    title: "Blog Post 2".to_string(),
                    description: "Write an attractive description of your second blog post here."
                        .to_string(),
                    image: "https://picsum.photos/600/400?random=2".to_string(),
                    link: "#".to_string(),
                },
            ],
            gallery: Vec::new(),
            skills: vec![
                Skill {
                    id: SkillId::new("1"),
                    name: "React".to_string(),
                },
                Skill {
                    id: SkillId::new("2"),
                    name: "Tailwind CSS".to_string(),
                },
                Skill {
                    id: SkillId::new("3"),
                    name: "TypeScript".to_string(),
                },
                Skill {
                    id: SkillId::new("4"),
                    name: "Node.js".to_string(),
                },
            ],
            notice: Notice::default(),
            products: Vec::new(),
            orders: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_camel_case_wire_shape() {
        let doc = Document::default();
        let value = serde_json::to_value(&doc).expect("serialize");
        let obj = value.as_object().expect("document serializes to an object");

        for key in [
            "name",
            "currentWork",
            "profileImage",
            "aboutText",
            "showAbout",
            "showProducts",
            "socialLinks",
            "posts",
            "gallery",
            "skills",
            "notice",
            "products",
            "orders",
        ] {
            assert!(obj.contains_key(key), "missing wire key {key}");
        }
    }

    #[test]
    fn test_document_json_roundtrip() {
        let mut doc = Document::default();
        doc.products.push(Product {
            id: ProductId::new("p-1"),
            name: "Print".to_string(),
            amount: Decimal::new(2500, 2),
            currency: "USD".to_string(),
            description: "A3 art print".to_string(),
            image: "https://picsum.photos/600/600".to_string(),
        });

        let json = serde_json::to_string(&doc).expect("serialize");
        let back: Document = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, doc);
    }

    #[test]
    fn test_product_amount_serializes_as_string() {
        let product = Product {
            id: ProductId::new("p-1"),
            name: "Print".to_string(),
            amount: Decimal::new(995, 2),
            currency: "USD".to_string(),
            description: String::new(),
            image: String::new(),
        };

        let value = serde_json::to_value(&product).expect("serialize");
        assert_eq!(value["amount"], serde_json::json!("9.95"));
    }

    #[test]
    fn test_product_lookup() {
        let mut doc = Document::default();
        let id = ProductId::generate();
        doc.products.push(Product {
            id: id.clone(),
            name: "Sticker pack".to_string(),
            amount: Decimal::new(500, 2),
            currency: "USD".to_string(),
            description: String::new(),
            image: String::new(),
        });

        assert_eq!(doc.product(&id).map(|p| p.name.as_str()), Some("Sticker pack"));
        assert!(doc.product(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn test_order_without_image_omits_wire_key() {
        let order = Order {
            id: OrderId::new("o-1"),
            product_id: ProductId::new("p-1"),
            product_name: "Print".to_string(),
            product_image: None,
            customer_name: "Ada".to_string(),
            customer_contact: "ada@example.com".to_string(),
            customer_country: "UK".to_string(),
            timestamp: DateTime::UNIX_EPOCH,
            status: OrderStatus::Pending,
        };

        let value = serde_json::to_value(&order).expect("serialize");
        assert!(value.get("productImage").is_none());
        assert_eq!(value["status"], serde_json::json!("pending"));
    }
}
