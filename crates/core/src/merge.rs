//! Field-wise reconciliation of a partial document over a complete one.
//!
//! A value read back from the remote store or the local cache may predate a
//! schema change and miss fields the current schema defines. [`DocumentPatch`]
//! deserializes whatever subset of fields is present; [`DocumentPatch::apply_to`]
//! overlays those fields onto a base document, keeping the base value for
//! every field the patch omits. The merge is a pure function over the fixed
//! field set, not a generic deep merge: a present field always wins wholesale,
//! including collections.

use serde::{Deserialize, Serialize};

use crate::document::{Document, GalleryItem, Notice, Order, Post, Product, Skill, SocialLink};
use crate::types::Theme;

/// A subset of document fields, as read from the remote store or cache.
///
/// Unknown keys are ignored; a field whose value fails typed deserialization
/// makes the whole patch unusable (the schema is a fixed typed field set, so
/// there is no per-field salvage).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub current_work: Option<String>,
    pub profile_image: Option<String>,
    pub about_text: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub theme: Option<Theme>,

    pub show_about: Option<bool>,
    pub show_skills: Option<bool>,
    pub show_blog: Option<bool>,
    pub show_gallery: Option<bool>,
    pub show_contact: Option<bool>,
    pub show_clock: Option<bool>,
    pub show_notice: Option<bool>,
    pub show_work: Option<bool>,
    pub show_products: Option<bool>,

    pub social_links: Option<Vec<SocialLink>>,
    pub posts: Option<Vec<Post>>,
    pub gallery: Option<Vec<GalleryItem>>,
    pub skills: Option<Vec<Skill>>,
    pub notice: Option<Notice>,
    pub products: Option<Vec<Product>>,
    pub orders: Option<Vec<Order>>,
}

impl DocumentPatch {
    /// Overlay this patch onto `base`: present fields replace the base value,
    /// absent fields keep it. The result always contains every schema field.
    #[must_use]
    pub fn apply_to(self, base: Document) -> Document {
        Document {
            name: self.name.unwrap_or(base.name),
            title: self.title.unwrap_or(base.title),
            bio: self.bio.unwrap_or(base.bio),
            current_work: self.current_work.unwrap_or(base.current_work),
            profile_image: self.profile_image.unwrap_or(base.profile_image),
            about_text: self.about_text.unwrap_or(base.about_text),
            email: self.email.unwrap_or(base.email),
            phone: self.phone.unwrap_or(base.phone),
            theme: self.theme.unwrap_or(base.theme),

            show_about: self.show_about.unwrap_or(base.show_about),
            show_skills: self.show_skills.unwrap_or(base.show_skills),
            show_blog: self.show_blog.unwrap_or(base.show_blog),
            show_gallery: self.show_gallery.unwrap_or(base.show_gallery),
            show_contact: self.show_contact.unwrap_or(base.show_contact),
            show_clock: self.show_clock.unwrap_or(base.show_clock),
            show_notice: self.show_notice.unwrap_or(base.show_notice),
            show_work: self.show_work.unwrap_or(base.show_work),
            show_products: self.show_products.unwrap_or(base.show_products),

            social_links: self.social_links.unwrap_or(base.social_links),
            posts: self.posts.unwrap_or(base.posts),
            gallery: self.gallery.unwrap_or(base.gallery),
            skills: self.skills.unwrap_or(base.skills),
            notice: self.notice.unwrap_or(base.notice),
            products: self.products.unwrap_or(base.products),
            orders: self.orders.unwrap_or(base.orders),
        }
    }

    /// Overlay this patch onto the schema defaults.
    #[must_use]
    pub fn onto_defaults(self) -> Document {
        self.apply_to(Document::default())
    }
}

impl From<Document> for DocumentPatch {
    /// A complete document viewed as a patch that sets every field.
    fn from(doc: Document) -> Self {
        Self {
            name: Some(doc.name),
            title: Some(doc.title),
            bio: Some(doc.bio),
            current_work: Some(doc.current_work),
            profile_image: Some(doc.profile_image),
            about_text: Some(doc.about_text),
            email: Some(doc.email),
            phone: Some(doc.phone),
            theme: Some(doc.theme),

            show_about: Some(doc.show_about),
            show_skills: Some(doc.show_skills),
            show_blog: Some(doc.show_blog),
            show_gallery: Some(doc.show_gallery),
            show_contact: Some(doc.show_contact),
            show_clock: Some(doc.show_clock),
            show_notice: Some(doc.show_notice),
            show_work: Some(doc.show_work),
            show_products: Some(doc.show_products),

            social_links: Some(doc.social_links),
            posts: Some(doc.posts),
            gallery: Some(doc.gallery),
            skills: Some(doc.skills),
            notice: Some(doc.notice),
            products: Some(doc.products),
            orders: Some(doc.orders),
        }
    }
}
